/// Rule options layered on top of the basic movement rules.
///
/// The default ([`Rules::classic`]) lets a player leave their own king
/// attacked and castle through attacked squares. [`Rules::strict`] turns
/// both restrictions on, which gives standard move legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    /// Reject moves that leave the mover's king attacked.
    pub forbid_self_check: bool,
    /// Reject castling out of, through, or into an attacked square.
    pub castling_requires_safe_path: bool,
}

impl Rules {
    pub const fn classic() -> Self {
        Self {
            forbid_self_check: false,
            castling_requires_safe_path: false,
        }
    }

    pub const fn strict() -> Self {
        Self {
            forbid_self_check: true,
            castling_requires_safe_path: true,
        }
    }
}
