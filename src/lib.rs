//! # card-tables
//!
//! Rule kernel for a collection of card tables: deck construction and
//! shuffling, hand scoring, a Klondike solitaire engine and a War engine,
//! plus small blackjack, baccarat, draw poker and guessing tables.
//!
//! ## Design Principles
//!
//! 1. **Pure State**: Every table is a plain value. Operations validate
//!    first and mutate only on success; a rejected call leaves the state
//!    exactly as it was and returns a [`RuleError`].
//!
//! 2. **Injected Randomness**: Nothing reads ambient entropy. Shuffles take
//!    any [`IndexSource`], and [`GameRng`] gives reproducible seeded deals.
//!
//! 3. **Configuration Over Convention**: Variant rules (ace position,
//!    straight detection, war stake size, solitaire conveniences) live in
//!    config structs with builder methods.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Cards, ranks, suits and the deck
//! - `zones`: Solitaire piles
//! - `scoring`: Blackjack, baccarat and poker evaluation, rank ordering
//! - `rules`: The `CardGame` trait every table reports through
//! - `games`: The tables themselves
//!
//! ```
//! use card_tables::{GameRng, SolitaireState, CardGame};
//!
//! let state = SolitaireState::initialize(&mut GameRng::new(7));
//! assert_eq!(state.cards_in_play(), 52);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod scoring;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, GameRngState, IndexSource,
    AcePosition, StraightRule,
    SolitaireConfig, WarConfig, PokerConfig, BlackjackConfig, HighLowConfig,
    RuleError, RuleResult,
};

pub use crate::cards::{new_deck, shuffle, Card, Color, Deck, Hand, Rank, Suit};

pub use crate::zones::{Pile, PileId};

pub use crate::scoring::{
    baccarat_points, blackjack_value, compare_ranks, evaluate_poker_hand, evaluate_with,
    war_rank_order, HandCategory,
};

pub use crate::rules::{CardGame, GameResult};

pub use crate::games::solitaire::{CardRef, GameStatus, Move, SelectOutcome, SolitaireState, StockDraw};
pub use crate::games::war::{DrawOutcome, Round, WarState, WarStatus};
pub use crate::games::blackjack::{BlackjackOutcome, BlackjackRound};
pub use crate::games::baccarat::{BaccaratOutcome, BaccaratRound};
pub use crate::games::draw_poker::DrawPoker;
pub use crate::games::high_low::{Guess, GuessResult, HighLow};
pub use crate::games::guess_card::{GuessOutcome, GuessTheCard};
pub use crate::games::memory::{FlipOutcome, MemoryBoard};
