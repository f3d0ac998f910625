//! Constants for board geometry and search parameters.
//!
//! American checkers is played on the 32 dark squares of an 8x8 board.
//! All values here are fixed at compile time; the engine has no runtime
//! configuration.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board edge length. Squares are addressed by (x, y) with both axes in
/// [0, BOARD_DIM).
pub const BOARD_DIM: u8 = 8;

/// Number of playable (dark) squares, and the length of the board array.
pub const PLAYABLE_SQUARES: usize = 32;

/// Rows initially occupied by each side's men.
pub const BACK_ROWS: u8 = 3;

/// Men per side in the initial position.
pub const MEN_PER_SIDE: usize = 12;

// =============================================================================
// Search Parameters
// =============================================================================

/// Playouts recorded at the root before a move is selected.
pub const N_SIMS: u32 = 1000;
