//! Spawner module - random piece selection with a one-piece lookahead
//!
//! Every draw is an independent uniform pick from the catalog (with
//! replacement), so the same shape may repeat any number of times.

use crate::catalog::{ShapeCatalog, ShapeTemplate};
use crate::rng::RandomSource;

/// Piece generator holding the next piece for preview
#[derive(Debug, Clone)]
pub struct Spawner<R> {
    catalog: ShapeCatalog,
    rng: R,
    /// Catalog index of the buffered next piece (`None` until primed)
    next: Option<usize>,
}

impl<R: RandomSource> Spawner<R> {
    pub fn new(catalog: ShapeCatalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            next: None,
        }
    }

    fn draw_index(&mut self) -> usize {
        self.rng.next_index(self.catalog.len())
    }

    /// Hand out the buffered piece and refill the buffer.
    ///
    /// On the first call the buffer is primed before it is consumed, so the
    /// first piece and the first preview are two independent draws.
    pub fn next(&mut self) -> ShapeTemplate {
        let current = match self.next {
            Some(index) => index,
            None => self.draw_index(),
        };
        self.next = Some(self.draw_index());
        self.template(current)
    }

    /// The buffered next piece, if the spawner has been primed
    pub fn peek(&self) -> Option<ShapeTemplate> {
        self.next.map(|index| self.template(index))
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn template(&self, index: usize) -> ShapeTemplate {
        // Indices always come from `next_index(len)`; the catalog is never empty.
        self.catalog.templates()[index % self.catalog.len()]
    }
}
