//! Theme module for pmlab-tui
//!
//! Centralized color palette and styling constants for the teal/slate
//! "workshop whiteboard" aesthetic.

use ratatui::style::Color;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color - deep slate (#0f172a)
pub const BG_PRIMARY: Color = Color::Rgb(15, 23, 42);

/// Secondary background color - panel surfaces (#1e293b)
pub const BG_SECONDARY: Color = Color::Rgb(30, 41, 59);

/// Subtle border color (#334155)
pub const BORDER_SUBTLE: Color = Color::Rgb(51, 65, 85);

// ============================================================================
// Accent Colors - Teal Primary
// ============================================================================

/// Primary teal accent color (#0d9488)
pub const TEAL_PRIMARY: Color = Color::Rgb(13, 148, 136);

/// Bright teal for chart bars and highlights (#2dd4bf)
pub const TEAL_BRIGHT: Color = Color::Rgb(45, 212, 191);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color - consensus, confirmations (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber warning color - discussion needed (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color - validation and generation failures (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
