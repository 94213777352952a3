/// Ledger connection configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// rippled JSON-RPC endpoint (default: the XRPL testnet).
    pub json_rpc_url: String,
    /// Platform operating account that submits mint transactions and
    /// custodies unsold editions.
    pub wallet_address: String,
    /// Seed for the platform wallet, passed to the server in
    /// sign-and-submit mode. Point `json_rpc_url` at a trusted node.
    pub wallet_seed: String,
    /// How long to wait for a submitted transaction to validate.
    pub submit_timeout_secs: u64,
    /// Page size for `account_nfts` pagination.
    pub page_limit: u32,
}

impl LedgerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Default                                   |
    /// |----------------------------|-------------------------------------------|
    /// | `XRPL_JSON_RPC_URL`        | `https://s.altnet.rippletest.net:51234`   |
    /// | `XRPL_WALLET_ADDRESS`      | (required)                                |
    /// | `XRPL_WALLET_SEED`         | (required)                                |
    /// | `XRPL_SUBMIT_TIMEOUT_SECS` | `30`                                      |
    /// | `XRPL_PAGE_LIMIT`          | `100`                                     |
    pub fn from_env() -> Self {
        let json_rpc_url = std::env::var("XRPL_JSON_RPC_URL")
            .unwrap_or_else(|_| "https://s.altnet.rippletest.net:51234".into());

        let wallet_address =
            std::env::var("XRPL_WALLET_ADDRESS").expect("XRPL_WALLET_ADDRESS must be set");

        let wallet_seed = std::env::var("XRPL_WALLET_SEED").expect("XRPL_WALLET_SEED must be set");

        let submit_timeout_secs: u64 = std::env::var("XRPL_SUBMIT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("XRPL_SUBMIT_TIMEOUT_SECS must be a valid u64");

        let page_limit: u32 = std::env::var("XRPL_PAGE_LIMIT")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("XRPL_PAGE_LIMIT must be a valid u32");

        Self {
            json_rpc_url,
            wallet_address,
            wallet_seed,
            submit_timeout_secs,
            page_limit,
        }
    }
}
