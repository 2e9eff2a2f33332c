//! Hardcoded track data.

use crate::catalog::identity::Priority::{self, High, Medium};
use crate::catalog::model::{ChecklistItem, Track};

fn item(category: &str, description: &str, priority: Priority) -> ChecklistItem {
    ChecklistItem::new(category, description, priority)
}

pub(crate) fn builtin_tracks() -> Vec<Track> {
    vec![
        Track::new(
            "aztec",
            "Aztec-style zk L2",
            "Checklist for a privacy-preserving zkRollup inspired by projects like Aztec. \
             Focuses on encrypted state, proving systems, and secure integration with L1.",
            vec![
                item(
                    "Protocol design",
                    "Define which parts of state are encrypted vs public.",
                    High,
                ),
                item(
                    "ZK system",
                    "Select a proving system and circuit language for L2 logic.",
                    High,
                ),
                item(
                    "Bridging",
                    "Specify how L1 and L2 balances are synchronized and verified.",
                    High,
                ),
                item(
                    "Privacy UX",
                    "Design flows for managing viewing keys and private balances.",
                    Medium,
                ),
                item(
                    "Gas and costs",
                    "Estimate proof generation cost and impact on fees.",
                    Medium,
                ),
                item(
                    "Audits",
                    "Plan audits for circuits, contracts, and trusted setup, if any.",
                    High,
                ),
            ],
        ),
        Track::new(
            "zama",
            "Zama-style FHE application",
            "Checklist for a Web3 or crypto system using fully homomorphic encryption, \
             inspired by ecosystems like Zama.",
            vec![
                item(
                    "Data model",
                    "Define which fields must remain encrypted end-to-end.",
                    High,
                ),
                item(
                    "FHE scheme",
                    "Choose the FHE scheme and libraries suited for your workloads.",
                    High,
                ),
                item(
                    "Performance",
                    "Benchmark ciphertext sizes and computation latency.",
                    High,
                ),
                item(
                    "Key management",
                    "Design key generation, rotation, and recovery procedures.",
                    High,
                ),
                item(
                    "Interoperability",
                    "Specify how FHE outputs interact with on-chain logic.",
                    Medium,
                ),
                item(
                    "Security review",
                    "Document threat model for ciphertext leakage and misuse.",
                    High,
                ),
            ],
        ),
        Track::new(
            "soundness",
            "Soundness-focused research lab",
            "Checklist for a team that prioritizes formal soundness, proofs, and rigorous \
             verification of cryptographic protocols.",
            vec![
                item(
                    "Specifications",
                    "Maintain executable, unambiguous protocol specifications.",
                    High,
                ),
                item(
                    "Proof strategy",
                    "Select proof techniques and tools for main security properties.",
                    High,
                ),
                item(
                    "Modeling",
                    "Model protocols in a formal framework or proof assistant.",
                    High,
                ),
                item(
                    "Review process",
                    "Define a process for proof and spec reviews before implementation.",
                    Medium,
                ),
                item(
                    "Implementation alignment",
                    "Continuously check that code matches the specification.",
                    High,
                ),
                item(
                    "Knowledge sharing",
                    "Document assumptions, invariants, and common pitfalls.",
                    Medium,
                ),
            ],
        ),
    ]
}
