//! src/crypto/block.rs
//! Object-safe view of a block cipher's forward direction.
//!
//! OCFB only ever runs the cipher forwards, and the algorithm is picked at
//! runtime from a wire identifier, so the keystream holds a `Box<dyn BlockFunction>`.

use cipher::{Block, BlockEncrypt, BlockSizeUser};

pub trait BlockFunction: Send {
    /// Block size in bytes.
    fn block_len(&self) -> usize;

    /// Encrypt exactly one block in place.
    ///
    /// # Panics
    ///
    /// If `block.len() != self.block_len()`. Callers size their buffers from
    /// `block_len`, so this never happens in the crate.
    fn encrypt_block_in_place(&self, block: &mut [u8]);
}

impl<C> BlockFunction for C
where
    C: BlockEncrypt + Send,
{
    #[inline(always)]
    fn block_len(&self) -> usize {
        <C as BlockSizeUser>::block_size()
    }

    #[inline(always)]
    fn encrypt_block_in_place(&self, block: &mut [u8]) {
        self.encrypt_block(Block::<C>::from_mut_slice(block));
    }
}
