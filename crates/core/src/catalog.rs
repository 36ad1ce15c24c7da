//! Catalog module - the seven canonical shapes and their colors

use crate::error::ConfigError;
use crate::shape::ShapeMatrix;
use crate::types::{PieceKind, Rgb};

/// A read-only piece template: kind, spawn-orientation matrix and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeTemplate {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub color: Rgb,
}

impl ShapeTemplate {
    pub const fn new(kind: PieceKind, matrix: ShapeMatrix, color: Rgb) -> Self {
        Self {
            kind,
            matrix,
            color,
        }
    }
}

pub const I_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 1, 1]]);
pub const O_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1], [1, 1]]);
pub const T_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 1], [0, 1, 0]]);
pub const L_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 1], [1, 0, 0]]);
pub const J_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 1], [0, 0, 1]]);
pub const S_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1]]);
pub const Z_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0]]);

/// Spawn-orientation matrix for a kind
pub fn shape_of(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// The standard template for a kind (canonical matrix and color)
pub fn template_of(kind: PieceKind) -> ShapeTemplate {
    ShapeTemplate::new(kind, shape_of(kind), kind.color())
}

/// Non-empty list of templates the spawner draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    templates: Vec<ShapeTemplate>,
}

impl ShapeCatalog {
    /// Build a catalog from arbitrary templates.
    ///
    /// Fails with [`ConfigError::EmptyCatalog`] when `templates` is empty.
    pub fn new(templates: Vec<ShapeTemplate>) -> Result<Self, ConfigError> {
        if templates.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { templates })
    }

    /// The seven canonical shapes in catalog order (I, O, T, L, J, S, Z)
    pub fn standard() -> Self {
        Self {
            templates: PieceKind::ALL.iter().map(|&k| template_of(k)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[ShapeTemplate] {
        &self.templates
    }

    /// Width of the widest template in any orientation
    pub fn max_extent(&self) -> usize {
        self.templates
            .iter()
            .map(|t| t.matrix.width().max(t.matrix.height()))
            .max()
            .unwrap_or(0)
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = ShapeCatalog::standard();
        assert_eq!(catalog.len(), 7);
        let kinds: Vec<_> = catalog.templates().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_every_standard_shape_has_four_cells() {
        for t in ShapeCatalog::standard().templates() {
            assert_eq!(t.matrix.filled_count(), 4, "{:?}", t.kind);
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(ShapeCatalog::new(Vec::new()), Err(ConfigError::EmptyCatalog));
    }

    #[test]
    fn test_max_extent() {
        assert_eq!(ShapeCatalog::standard().max_extent(), 4);
        let only_o = ShapeCatalog::new(vec![template_of(PieceKind::O)]).unwrap();
        assert_eq!(only_o.max_extent(), 2);
    }
}
