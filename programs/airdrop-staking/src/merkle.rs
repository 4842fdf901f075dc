//! Allocation commitment verification.
//!
//! The allowlist is committed off-chain as the root of a binary keccak-256
//! tree over `(recipient, amount)` leaves. The program only ever verifies
//! inclusion proofs against the stored root; it never builds the tree.
//!
//! # Encoding contract (must match the off-chain builder bit-for-bit)
//! - Leaf: `keccak(recipient_pubkey_bytes ‖ amount.to_le_bytes())`
//! - Node: `keccak(min(L, R) ‖ max(L, R))` — siblings are ordered by byte
//!   value, so proofs carry no left/right flags.
//! - An odd node at any level is promoted unchanged to the next level.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

/// Leaf hash for an allocation entry.
pub fn hash_leaf(recipient: &Pubkey, amount: u64) -> [u8; 32] {
    keccak::hashv(&[recipient.as_ref(), &amount.to_le_bytes()]).0
}

/// Parent hash with byte-order-normalized children.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak::hashv(&[a, b]).0
    } else {
        keccak::hashv(&[b, a]).0
    }
}

/// Verify an inclusion proof against the committed root.
///
/// Pure and side-effect free; a mismatch is an ordinary `false`, never a
/// panic. The claim handler maps `false` to `AirdropError::InvalidProof`.
pub fn verify_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf: &[u8; 32]) -> bool {
    let mut node = *leaf;
    for sibling in proof {
        node = hash_pair(&node, sibling);
    }
    node == *root
}

#[cfg(test)]
pub mod test_tree {
    //! Reference tree builder mirroring the off-chain allowlist tool.
    //! Test-only: the program itself never constructs trees.

    use super::*;

    /// Build the full tree and return (root, proofs-by-leaf-index).
    pub fn build(leaves: &[[u8; 32]]) -> ([u8; 32], Vec<Vec<[u8; 32]>>) {
        assert!(!leaves.is_empty());
        let mut proofs: Vec<Vec<[u8; 32]>> = vec![Vec::new(); leaves.len()];
        // Track which tree position each original leaf currently occupies.
        let mut positions: Vec<usize> = (0..leaves.len()).collect();
        let mut level: Vec<[u8; 32]> = leaves.to_vec();

        while level.len() > 1 {
            let mut next = Vec::with_capacity((level.len() + 1) / 2);
            for pair in level.chunks(2) {
                if pair.len() == 2 {
                    next.push(hash_pair(&pair[0], &pair[1]));
                } else {
                    // Odd node promoted unchanged.
                    next.push(pair[0]);
                }
            }
            for (leaf_idx, pos) in positions.iter_mut().enumerate() {
                let sibling = *pos ^ 1;
                if sibling < level.len() {
                    proofs[leaf_idx].push(level[sibling]);
                }
                *pos /= 2;
            }
            level = next;
        }
        (level[0], proofs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_allocations(n: usize) -> Vec<(Pubkey, u64)> {
        (0..n)
            .map(|i| (Pubkey::new_from_array([i as u8 + 1; 32]), (i as u64 + 1) * 1_000))
            .collect()
    }

    #[test]
    fn single_leaf_tree_has_empty_proof() {
        let (recipient, amount) = (Pubkey::new_unique(), 42u64);
        let leaf = hash_leaf(&recipient, amount);
        let (root, proofs) = test_tree::build(&[leaf]);
        assert_eq!(root, leaf);
        assert!(proofs[0].is_empty());
        assert!(verify_proof(&proofs[0], &root, &leaf));
    }

    #[test]
    fn every_member_verifies() {
        for n in [2usize, 3, 5, 8, 13] {
            let allocations = sample_allocations(n);
            let leaves: Vec<[u8; 32]> = allocations
                .iter()
                .map(|(r, a)| hash_leaf(r, *a))
                .collect();
            let (root, proofs) = test_tree::build(&leaves);
            for (i, leaf) in leaves.iter().enumerate() {
                assert!(
                    verify_proof(&proofs[i], &root, leaf),
                    "member {i} of {n} failed to verify"
                );
            }
        }
    }

    #[test]
    fn wrong_amount_is_rejected() {
        let allocations = sample_allocations(4);
        let leaves: Vec<[u8; 32]> = allocations
            .iter()
            .map(|(r, a)| hash_leaf(r, *a))
            .collect();
        let (root, proofs) = test_tree::build(&leaves);

        let (recipient, amount) = allocations[2];
        let forged = hash_leaf(&recipient, amount + 1);
        assert!(!verify_proof(&proofs[2], &root, &forged));
    }

    #[test]
    fn single_bit_proof_tamper_is_rejected() {
        let allocations = sample_allocations(7);
        let leaves: Vec<[u8; 32]> = allocations
            .iter()
            .map(|(r, a)| hash_leaf(r, *a))
            .collect();
        let (root, proofs) = test_tree::build(&leaves);

        let leaf = leaves[3];
        for node in 0..proofs[3].len() {
            let mut tampered = proofs[3].clone();
            tampered[node][0] ^= 0x01;
            assert!(!verify_proof(&tampered, &root, &leaf));
        }
    }

    #[test]
    fn proof_for_other_member_is_rejected() {
        let allocations = sample_allocations(6);
        let leaves: Vec<[u8; 32]> = allocations
            .iter()
            .map(|(r, a)| hash_leaf(r, *a))
            .collect();
        let (root, proofs) = test_tree::build(&leaves);
        assert!(!verify_proof(&proofs[1], &root, &leaves[0]));
    }

    #[test]
    fn leaf_encoding_is_little_endian() {
        let recipient = Pubkey::new_from_array([7u8; 32]);
        let le = keccak::hashv(&[recipient.as_ref(), &258u64.to_le_bytes()]).0;
        assert_eq!(hash_leaf(&recipient, 258), le);
        let be = keccak::hashv(&[recipient.as_ref(), &258u64.to_be_bytes()]).0;
        assert_ne!(hash_leaf(&recipient, 258), be);
    }

    #[test]
    fn pair_hash_is_order_normalized() {
        let a = [0x01u8; 32];
        let b = [0xFFu8; 32];
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }
}
