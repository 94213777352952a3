//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Mint job lifecycle. Transitions are monotonic:
    /// pending -> minting -> {complete, failed}.
    MintJobStatus {
        Pending = 1,
        Minting = 2,
        Complete = 3,
        Failed = 4,
    }
}

define_status_enum! {
    /// Inventory unit sale state.
    NftStatus {
        Available = 1,
        /// Reserved by an in-flight purchase.
        Pending = 2,
        Sold = 3,
    }
}

impl MintJobStatus {
    /// Map a database status ID back to the enum.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(MintJobStatus::Pending),
            2 => Some(MintJobStatus::Minting),
            3 => Some(MintJobStatus::Complete),
            4 => Some(MintJobStatus::Failed),
            _ => None,
        }
    }

    /// Whether a job in this status can never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, MintJobStatus::Complete | MintJobStatus::Failed)
    }

    /// Client-facing status string.
    pub fn as_str(self) -> &'static str {
        match self {
            MintJobStatus::Pending => "pending",
            MintJobStatus::Minting => "minting",
            MintJobStatus::Complete => "complete",
            MintJobStatus::Failed => "failed",
        }
    }
}
