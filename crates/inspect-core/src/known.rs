//! Directory of well-known program and sysvar addresses.

use serde::Serialize;

/// One directory entry: a display name, a short purpose line, and the
/// Base58 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownAddress {
    pub name: &'static str,
    pub purpose: &'static str,
    pub address: &'static str,
}

/// Core programs, notable mints, and sysvars, in display order.
pub const KNOWN_ADDRESSES: &[KnownAddress] = &[
    KnownAddress {
        name: "System Program",
        purpose: "Creates accounts, allocates account data, assigns programs to accounts, and transfers lamports",
        address: "11111111111111111111111111111111",
    },
    KnownAddress {
        name: "SPL Token Program",
        purpose: "Standard token program for creating and managing fungible and non-fungible tokens",
        address: "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
    },
    KnownAddress {
        name: "Token2022 Program (Token Extensions)",
        purpose: "Enhanced token program with additional features like transfer fees, confidential transfers, etc.",
        address: "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb",
    },
    KnownAddress {
        name: "Associated Token Program",
        purpose: "Creates deterministic token accounts (ATAs) for holding SPL tokens",
        address: "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL",
    },
    KnownAddress {
        name: "BPF Loader",
        purpose: "Loads and executes BPF (Berkeley Packet Filter) programs",
        address: "BPFLoader2111111111111111111111111111111111",
    },
    KnownAddress {
        name: "BPF Loader Upgradeable",
        purpose: "Loads upgradeable BPF programs",
        address: "BPFLoaderUpgradeab1e11111111111111111111111",
    },
    KnownAddress {
        name: "Compute Budget Program",
        purpose: "Allows programs to request additional compute units",
        address: "ComputeBudget111111111111111111111111111111",
    },
    KnownAddress {
        name: "Address Lookup Table Program",
        purpose: "Manages address lookup tables for transaction size optimization",
        address: "AddressLookupTab1e1111111111111111111111111",
    },
    KnownAddress {
        name: "Ed25519 Program",
        purpose: "Verifies Ed25519 signatures",
        address: "Ed25519SigVerify111111111111111111111111111",
    },
    KnownAddress {
        name: "Secp256k1 Program",
        purpose: "Verifies secp256k1 signatures (Ethereum-style)",
        address: "KeccakSecp256k11111111111111111111111111111",
    },
    KnownAddress {
        name: "Metaplex Token Metadata Program",
        purpose: "Manages metadata for SPL tokens and NFTs",
        address: "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s",
    },
    KnownAddress {
        name: "Wrapped SOL (WSOL)",
        purpose: "SPL token representation of native SOL",
        address: "So11111111111111111111111111111111111111112",
    },
    KnownAddress {
        name: "Sysvar",
        purpose: "Generic sysvar address for system variables",
        address: "Sysvar1111111111111111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Clock",
        purpose: "Provides access to current cluster time and slot information",
        address: "SysvarC1ock11111111111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Rent",
        purpose: "Provides rent configuration and calculation information",
        address: "SysvarRent111111111111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Epoch Schedule",
        purpose: "Provides epoch and slot schedule information",
        address: "SysvarEpochSchedu1e111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Fees",
        purpose: "Provides fee calculation information",
        address: "SysvarFees111111111111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Instructions",
        purpose: "Provides access to instructions in the current transaction",
        address: "Sysvar1nstructions1111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Recent Blockhashes",
        purpose: "Provides recent blockhashes for transaction validation",
        address: "SysvarRecentB1ockHashes11111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Rewards",
        purpose: "Provides staking rewards information",
        address: "SysvarRewards111111111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Slot Hashes",
        purpose: "Provides recent slot hashes",
        address: "SysvarS1otHashes111111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Slot History",
        purpose: "Provides historical slot information",
        address: "SysvarS1otHistory11111111111111111111111111",
    },
    KnownAddress {
        name: "Sysvar: Stake History",
        purpose: "Provides historical stake information",
        address: "SysvarStakeHistory1111111111111111111111111",
    },
];

/// Look an address up in the directory.
pub fn lookup(address: &str) -> Option<&'static KnownAddress> {
    let address = address.trim();
    KNOWN_ADDRESSES.iter().find(|entry| entry.address == address)
}
