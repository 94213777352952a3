//! NFTokenID extraction from transaction metadata.
//!
//! A mint touches one or more `NFTokenPage` ledger objects. The freshly
//! minted token is whichever ID appears in the final state of those
//! pages but not in their previous state. Pages can be created, split,
//! or modified by one mint, so the diff runs across every affected page
//! node rather than assuming a single container.

use std::collections::HashSet;

use serde_json::Value;

/// Pull the minted NFTokenID out of a validated transaction's metadata.
///
/// Returns `None` when the ID cannot be located (unexpected metadata
/// shape, or more than one candidate). The caller treats that as
/// "minted but unindexed": logged and left to manual reconciliation,
/// never an error.
pub fn extract_minted_token_id(meta: &Value) -> Option<String> {
    let nodes = meta.get("AffectedNodes")?.as_array()?;

    let mut previous: HashSet<String> = HashSet::new();
    let mut current: HashSet<String> = HashSet::new();

    for node in nodes {
        if let Some(created) = nft_page(node, "CreatedNode") {
            current.extend(page_token_ids(created.get("NewFields")));
        }
        if let Some(modified) = nft_page(node, "ModifiedNode") {
            current.extend(page_token_ids(modified.get("FinalFields")));
            previous.extend(page_token_ids(modified.get("PreviousFields")));
        }
    }

    let mut minted = current.difference(&previous);
    let candidate = minted.next()?;
    if minted.next().is_some() {
        // Ambiguous metadata; give up rather than guess.
        return None;
    }
    Some(candidate.clone())
}

/// The node's inner object if it is an `NFTokenPage` entry of the given kind.
fn nft_page<'a>(node: &'a Value, kind: &str) -> Option<&'a Value> {
    let inner = node.get(kind)?;
    if inner.get("LedgerEntryType")?.as_str()? == "NFTokenPage" {
        Some(inner)
    } else {
        None
    }
}

/// NFTokenIDs inside a page's `NFTokens` field, tolerating absence.
fn page_token_ids(fields: Option<&Value>) -> Vec<String> {
    fields
        .and_then(|f| f.get("NFTokens"))
        .and_then(Value::as_array)
        .map(|tokens| {
            tokens
                .iter()
                .filter_map(|t| t.get("NFToken")?.get("NFTokenID")?.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
