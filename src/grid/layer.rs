use glam::{IVec2, UVec2};

use crate::types::GridError;

/// Fixed-shape 2D layer with row-major storage and bounds-checked access.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer2d<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Copy> Layer2d<T> {
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; (width as usize) * (height as usize)],
        }
    }

    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self, GridError> {
        let expected_len = (width as usize) * (height as usize);
        if data.len() != expected_len {
            return Err(GridError::InvalidMetadata(format!(
                "data length {} does not match layer size {}",
                data.len(),
                expected_len
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, cell: UVec2) -> Option<&T> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        let idx = self.index(cell);
        Some(&self.data[idx])
    }

    pub fn set(&mut self, cell: UVec2, value: T) -> Result<(), GridError> {
        if cell.x >= self.width || cell.y >= self.height {
            return Err(GridError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for layer {}x{}",
                cell.x, cell.y, self.width, self.height
            )));
        }
        let idx = self.index(cell);
        self.data[idx] = value;
        Ok(())
    }

    /// Write that silently drops cells outside the layer. This is the
    /// out-of-range policy for all rasterized shapes: clip, never wrap.
    pub fn set_clipped(&mut self, cell: IVec2, value: T) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        let cell = cell.as_uvec2();
        if cell.x >= self.width || cell.y >= self.height {
            return;
        }
        let idx = self.index(cell);
        self.data[idx] = value;
    }

    /// Row-major cells, row `y = 0` first.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn index(&self, cell: UVec2) -> usize {
        (cell.y as usize) * (self.width as usize) + (cell.x as usize)
    }
}
