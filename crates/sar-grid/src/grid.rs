//! Multi-occupancy grid with obstacle-aware movement.
//!
//! # Data layout
//!
//! Cells are stored row-major in a dense `Vec`: cell `(x, y)` lives at index
//! `y * width + x`.  Each slot holds the (small) list of entity IDs occupying
//! that cell — any number of entities may share a cell.  A reverse index maps
//! every placed entity to its current cell, so position lookups never scan.
//!
//! Obstacles block *movement* only: the `blocked` mask is consulted by
//! [`Grid::move_to`], but obstacle cells remain fully queryable through
//! [`Grid::contents`] and the neighborhood iterators.  The mask is written
//! once at setup when obstacles are placed; movement rejection is then O(1)
//! instead of a scan of the destination cell's contents.

use rustc_hash::FxHashMap;

use sar_core::{Cell, EntityId};

use crate::{GridError, GridResult};

/// A bounded width×height cell space with multiple occupancy per cell.
///
/// No wraparound: coordinates are valid only within
/// [0, width) × [0, height).
pub struct Grid {
    width: u32,
    height: u32,
    /// Row-major per-cell occupant lists.
    cells: Vec<Vec<EntityId>>,
    /// Reverse position index for every placed entity.
    positions: FxHashMap<EntityId, Cell>,
    /// Movement mask; `true` where an obstacle sits.
    blocked: Vec<bool>,
}

impl Grid {
    /// Construct an empty grid.  Fails on a zero-area grid.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let area = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Vec::new(); area],
            positions: FxHashMap::default(),
            blocked: vec![false; area],
        })
    }

    // ── Dimensions and bounds ─────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// `true` if `cell` lies within the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width
            && (cell.y as u32) < self.height
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    fn check_bounds(&self, cell: Cell) -> GridResult<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { cell, width: self.width, height: self.height })
        }
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// All entities currently occupying `cell`.  Out-of-bounds cells are
    /// empty by definition.
    pub fn contents(&self, cell: Cell) -> &[EntityId] {
        if self.in_bounds(cell) {
            &self.cells[self.index(cell)]
        } else {
            &[]
        }
    }

    /// Current cell of `id`, or `None` if it was never placed.
    pub fn position_of(&self, id: EntityId) -> Option<Cell> {
        self.positions.get(&id).copied()
    }

    /// `true` if movement into `cell` is forbidden.  Out-of-bounds cells
    /// count as blocked, so callers can treat the grid edge and obstacles
    /// uniformly.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.blocked[self.index(cell)]
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Place a previously unplaced entity at `cell`.
    pub fn place(&mut self, id: EntityId, cell: Cell) -> GridResult<()> {
        self.check_bounds(cell)?;
        if self.positions.contains_key(&id) {
            return Err(GridError::AlreadyPlaced(id));
        }
        let idx = self.index(cell);
        self.cells[idx].push(id);
        self.positions.insert(id, cell);
        Ok(())
    }

    /// Mark `cell` as impassable.  Called once per obstacle at setup.
    pub fn block(&mut self, cell: Cell) -> GridResult<()> {
        self.check_bounds(cell)?;
        let idx = self.index(cell);
        self.blocked[idx] = true;
        Ok(())
    }

    /// Move a placed entity to `dest`.
    ///
    /// Returns `Ok(false)` — a silent no-op — when `dest` is out of bounds
    /// or blocked by an obstacle; the entity stays where it is.  Errors only
    /// on an entity that was never placed.
    pub fn move_to(&mut self, id: EntityId, dest: Cell) -> GridResult<bool> {
        let from = self.position_of(id).ok_or(GridError::NotPlaced(id))?;
        if self.is_blocked(dest) {
            return Ok(false);
        }
        let from_idx = self.index(from);
        self.cells[from_idx].retain(|&e| e != id);
        let dest_idx = self.index(dest);
        self.cells[dest_idx].push(id);
        self.positions.insert(id, dest);
        Ok(true)
    }

    // ── Neighborhood queries ──────────────────────────────────────────────

    /// The Moore (Chebyshev) neighborhood of `center` with the given radius,
    /// clipped to the grid bounds.  `include_center` controls whether the
    /// center cell itself appears.  Cells are yielded in row-major order.
    pub fn neighborhood(&self, center: Cell, radius: u32, include_center: bool) -> Vec<Cell> {
        let r = radius as i32;
        let mut out = Vec::new();
        for dy in -r..=r {
            for dx in -r..=r {
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                let cell = Cell::new(center.x + dx, center.y + dy);
                if self.in_bounds(cell) {
                    out.push(cell);
                }
            }
        }
        out
    }
}
