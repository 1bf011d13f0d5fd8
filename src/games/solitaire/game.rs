//! Klondike solitaire state machine.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::moves::{can_build_on_foundation, can_build_on_tableau, CardRef, Move};
use crate::cards::{Card, Deck, Rank, Suit, STANDARD_DECK_SIZE};
use crate::core::{IndexSource, RuleError, RuleResult, Side, SolitaireConfig};
use crate::rules::{CardGame, GameResult};
use crate::zones::{Pile, PileId};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;
/// Number of foundation piles.
pub const FOUNDATIONS: usize = 4;

/// Lifecycle of a deal. `Won` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
}

/// What a stock click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockDraw {
    /// One card moved from stock to waste, now face up.
    Drawn(Card),
    /// The stock was empty; this many waste cards became the new stock.
    Recycled(usize),
}

/// What a card click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The card is now selected.
    Selected,
    /// The selected card was clicked again and the selection cleared.
    Cleared,
    /// The selected card moved onto the clicked card's pile.
    Moved,
}

/// Explicit pile contents for [`SolitaireState::from_layout`].
#[derive(Clone, Debug, Default)]
pub struct Layout {
    pub tableau: [Vec<Card>; TABLEAU_COLUMNS],
    pub foundations: [Vec<Card>; FOUNDATIONS],
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
}

/// Full Klondike table.
///
/// Every pile is owned here and cards move between piles by value, so the 52
/// cards are always split across stock, waste, foundations and tableau with
/// each appearing exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolitaireState {
    config: SolitaireConfig,
    tableau: [Pile; TABLEAU_COLUMNS],
    foundations: [Pile; FOUNDATIONS],
    stock: Pile,
    waste: Pile,
    selected: Option<CardRef>,
    status: GameStatus,
}

impl SolitaireState {
    /// Shuffle a fresh deck and deal with the default options.
    #[must_use]
    pub fn initialize<R: IndexSource + ?Sized>(rng: &mut R) -> Self {
        Self::with_config(SolitaireConfig::default(), rng)
    }

    /// Shuffle a fresh deck and deal.
    ///
    /// Column `i` takes the next `i + 1` cards off the top of the deck with
    /// only its top card turned up; the remaining 24 cards form the stock.
    #[must_use]
    pub fn with_config<R: IndexSource + ?Sized>(config: SolitaireConfig, rng: &mut R) -> Self {
        let mut cards = Deck::shuffled(false, rng).into_cards();

        let tableau: [Pile; TABLEAU_COLUMNS] = std::array::from_fn(|column| {
            let split = cards.len() - (column + 1);
            let mut pile = Pile::from_cards(cards.split_off(split));
            pile.flip_top();
            pile
        });

        log::debug!("dealt solitaire: {} cards left in stock", cards.len());

        Self {
            config,
            tableau,
            foundations: Default::default(),
            stock: Pile::from_cards(cards),
            waste: Pile::new(),
            selected: None,
            status: GameStatus::Playing,
        }
    }

    /// Build a table from explicit piles.
    ///
    /// The layout must hold each of the 52 standard cards exactly once, and
    /// every foundation must run ace upward in a single suit.
    /// Stock cards are turned face down and waste cards face up; tableau and
    /// foundation cards keep the flags they were given.
    pub fn from_layout(config: SolitaireConfig, layout: Layout) -> RuleResult<Self> {
        let Layout {
            tableau,
            foundations,
            stock,
            waste,
        } = layout;

        let mut seen = FxHashSet::default();
        let all = tableau
            .iter()
            .chain(foundations.iter())
            .chain([&stock, &waste])
            .flat_map(|pile| pile.iter());
        for card in all {
            if card.suit == Suit::Joker {
                return Err(RuleError::InvalidLayout("jokers are not dealt in solitaire".into()));
            }
            if !seen.insert(card.face()) {
                return Err(RuleError::InvalidLayout(format!("{} appears twice", card)));
            }
        }
        if seen.len() != STANDARD_DECK_SIZE {
            return Err(RuleError::InvalidLayout(format!(
                "expected {} cards, found {}",
                STANDARD_DECK_SIZE,
                seen.len()
            )));
        }
        for (f, pile) in foundations.iter().enumerate() {
            let mut top: Option<&Card> = None;
            for card in pile {
                if !can_build_on_foundation(card, top) {
                    return Err(RuleError::InvalidLayout(format!(
                        "foundation {} cannot hold {} there",
                        f, card
                    )));
                }
                top = Some(card);
            }
        }

        let mut state = Self {
            config,
            tableau: tableau.map(Pile::from_cards),
            foundations: foundations.map(Pile::from_cards),
            stock: Pile::from_cards(stock.into_iter().map(Card::hidden).collect()),
            waste: Pile::from_cards(waste.into_iter().map(Card::revealed).collect()),
            selected: None,
            status: GameStatus::Playing,
        };
        if state.check_win() {
            state.status = GameStatus::Won;
        }
        Ok(state)
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &SolitaireConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn selected(&self) -> Option<CardRef> {
        self.selected
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile; TABLEAU_COLUMNS] {
        &self.tableau
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATIONS] {
        &self.foundations
    }

    /// Look up a pile, `None` for an out-of-range index.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(i) => self.foundations.get(i),
            PileId::Tableau(i) => self.tableau.get(i),
        }
    }

    /// Card at a position, if any.
    #[must_use]
    pub fn card_at(&self, at: CardRef) -> Option<&Card> {
        self.pile(at.pile)?.get(at.index)
    }

    fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(i) => self.foundations.get_mut(i),
            PileId::Tableau(i) => self.tableau.get_mut(i),
        }
    }

    fn ensure_playing(&self) -> RuleResult<()> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::Won => Err(RuleError::GameOver),
        }
    }

    // === Stock ===

    /// Turn the top stock card onto the waste, or recycle the waste into the
    /// stock when the stock is empty.
    ///
    /// Recycling reverses the waste so the stock deals again in the order it
    /// did the first time round.
    pub fn draw_from_stock(&mut self) -> RuleResult<StockDraw> {
        self.ensure_playing()?;

        if let Some(card) = self.stock.pop() {
            let card = card.revealed();
            self.waste.push(card);
            self.drop_stale_selection();
            log::debug!("stock -> waste: {}", card);
            return Ok(StockDraw::Drawn(card));
        }

        if self.waste.is_empty() {
            return Err(RuleError::EmptySource("stock"));
        }

        let recycled = self.waste.take_all();
        let count = recycled.len();
        self.stock.extend(recycled.into_iter().rev().map(Card::hidden));
        self.drop_stale_selection();
        log::debug!("recycled {} waste cards into the stock", count);
        Ok(StockDraw::Recycled(count))
    }

    fn drop_stale_selection(&mut self) {
        if matches!(self.selected, Some(sel) if matches!(sel.pile, PileId::Waste | PileId::Stock)) {
            self.selected = None;
        }
    }

    // === Selection ===

    /// Click a card.
    ///
    /// - Nothing selected: a face-up card becomes the selection. Waste and
    ///   foundation piles only offer their top card.
    /// - The selected card again: the selection clears. With
    ///   `return_waste_on_deselect`, a waste card also goes back onto the stock.
    /// - Another card: the selected card tries to move onto that card's pile.
    ///   A rejected move keeps the selection.
    pub fn select_card(&mut self, card: CardRef) -> RuleResult<SelectOutcome> {
        self.ensure_playing()?;

        match self.selected {
            Some(selected) if selected == card => {
                self.selected = None;
                let waste_top = selected.pile == PileId::Waste && self.waste.top_index() == Some(selected.index);
                if waste_top && self.config.return_waste_on_deselect {
                    if let Some(returned) = self.waste.pop() {
                        self.stock.push(returned.hidden());
                    }
                }
                Ok(SelectOutcome::Cleared)
            }
            Some(selected) => self.try_move(selected, card.pile).map(|_| SelectOutcome::Moved),
            None => {
                let pile = self
                    .pile(card.pile)
                    .ok_or(RuleError::invalid("no such pile"))?;
                if pile.is_empty() {
                    return Err(RuleError::EmptySource(card.pile.name()));
                }
                let target = pile
                    .get(card.index)
                    .ok_or(RuleError::invalid("no card at that position"))?;
                if !target.face_up {
                    return Err(RuleError::invalid("card is face down"));
                }
                let top_only = matches!(card.pile, PileId::Waste | PileId::Foundation(_));
                if top_only && pile.top_index() != Some(card.index) {
                    return Err(RuleError::invalid("only the top card can be picked up there"));
                }
                self.selected = Some(card);
                Ok(SelectOutcome::Selected)
            }
        }
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // === Moves ===

    /// Check a move without applying it.
    pub fn check_move(&self, from: CardRef, to: PileId) -> RuleResult<()> {
        self.ensure_playing()?;

        if from.pile == to {
            return Err(RuleError::invalid("source and destination are the same pile"));
        }
        let source = self.pile(from.pile).ok_or(RuleError::invalid("no such source pile"))?;
        let dest = self.pile(to).ok_or(RuleError::invalid("no such destination pile"))?;

        match (from.pile, to) {
            (_, PileId::Stock | PileId::Waste) => {
                return Err(RuleError::invalid("cards only build on tableau or foundations"))
            }
            (PileId::Stock, _) => return Err(RuleError::invalid("stock cards must be drawn first")),
            (PileId::Foundation(_), PileId::Foundation(_)) => {
                return Err(RuleError::invalid("foundation cards only return to the tableau"))
            }
            (PileId::Foundation(_), _) if !self.config.allow_foundation_return => {
                return Err(RuleError::invalid("foundation cards stay put"))
            }
            _ => {}
        }

        if source.is_empty() {
            return Err(RuleError::EmptySource(from.pile.name()));
        }
        let card = source
            .get(from.index)
            .ok_or(RuleError::invalid("no card at that position"))?;

        let run = &source.cards()[from.index..];
        if run.iter().any(|c| !c.face_up) {
            return Err(RuleError::invalid("card is face down"));
        }
        if run.len() > 1 {
            let run_allowed = from.pile.is_tableau() && to.is_tableau() && self.config.allow_run_moves;
            if !run_allowed {
                return Err(RuleError::invalid("only the top card can move there"));
            }
        }

        let legal = match to {
            PileId::Tableau(_) => can_build_on_tableau(card, dest.top()),
            PileId::Foundation(_) => can_build_on_foundation(card, dest.top()),
            PileId::Stock | PileId::Waste => false,
        };
        if legal {
            Ok(())
        } else if to.is_tableau() {
            Err(RuleError::invalid("tableau needs alternating colour, one rank lower, or a king"))
        } else {
            Err(RuleError::invalid("foundation needs the same suit, one rank higher, or an ace"))
        }
    }

    /// Apply a move, or reject it with no change to any pile.
    ///
    /// On success the source column's new top card is turned up, the
    /// selection clears, and a foundation move checks for the win.
    pub fn try_move(&mut self, from: CardRef, to: PileId) -> RuleResult<()> {
        if let Err(err) = self.check_move(from, to) {
            log::trace!("rejected {}: {}", Move::new(from, to), err);
            return Err(err);
        }

        let moving = self
            .pile_mut(from.pile)
            .map(|source| source.split_off(from.index))
            .unwrap_or_default();
        if let Some(dest) = self.pile_mut(to) {
            dest.extend(moving);
        }
        if let PileId::Tableau(column) = from.pile {
            if self.tableau[column].flip_top() {
                log::debug!("turned up the top card of column {}", column);
            }
        }
        self.selected = None;
        log::debug!("applied {}", Move::new(from, to));

        if to.is_foundation() && self.check_win() {
            self.status = GameStatus::Won;
            log::debug!("solitaire won");
        }
        Ok(())
    }

    /// Boolean form of [`try_move`](Self::try_move).
    pub fn move_card(&mut self, from: CardRef, to: PileId) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Apply a [`Move`].
    pub fn apply(&mut self, mv: Move) -> RuleResult<()> {
        self.try_move(mv.from, mv.to)
    }

    /// Send a card wherever it fits first.
    ///
    /// Foundations are tried in index order; a tableau card then tries the
    /// other columns in index order. Waste cards only go to foundations.
    pub fn auto_move_card(&mut self, from: CardRef) -> bool {
        if !matches!(from.pile, PileId::Waste | PileId::Tableau(_)) {
            return false;
        }
        if (0..FOUNDATIONS).any(|f| self.move_card(from, PileId::Foundation(f))) {
            return true;
        }
        if let PileId::Tableau(source) = from.pile {
            return (0..TABLEAU_COLUMNS)
                .filter(|&column| column != source)
                .any(|column| self.move_card(from, PileId::Tableau(column)));
        }
        false
    }

    /// Every move `check_move` accepts right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut sources = Vec::new();
        if let Some(top) = self.waste.top_index() {
            sources.push(CardRef::new(PileId::Waste, top));
        }
        for (f, pile) in self.foundations.iter().enumerate() {
            if let Some(top) = pile.top_index() {
                sources.push(CardRef::new(PileId::Foundation(f), top));
            }
        }
        for (column, pile) in self.tableau.iter().enumerate() {
            for (index, card) in pile.iter().enumerate() {
                if card.face_up {
                    sources.push(CardRef::new(PileId::Tableau(column), index));
                }
            }
        }

        let dests = (0..FOUNDATIONS)
            .map(PileId::Foundation)
            .chain((0..TABLEAU_COLUMNS).map(PileId::Tableau));

        let mut moves = Vec::new();
        for dest in dests {
            for &from in &sources {
                if self.check_move(from, dest).is_ok() {
                    moves.push(Move::new(from, dest));
                }
            }
        }
        moves
    }

    /// All four foundations hold thirteen cards topped by a king.
    fn check_win(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.len() == 13 && pile.top().is_some_and(|c| c.rank == Rank::KING))
    }
}

impl CardGame for SolitaireState {
    fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Won => Some(GameResult::Winner(Side::Player)),
            GameStatus::Playing => None,
        }
    }

    fn cards_in_play(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn c(suit: Suit, v: u8) -> Card {
        Card::new(suit, Rank::new(v).unwrap())
    }

    /// Every card in foundations except the kings, which sit face up in the
    /// first four columns.
    fn nearly_won() -> Layout {
        let mut layout = Layout::default();
        for (f, suit) in Suit::STANDARD.into_iter().enumerate() {
            layout.foundations[f] = (1..=12).map(|v| c(suit, v).revealed()).collect();
            layout.tableau[f] = vec![c(suit, 13).revealed()];
        }
        layout
    }

    #[test]
    fn test_initial_deal() {
        let state = SolitaireState::initialize(&mut GameRng::new(42));

        for (column, pile) in state.tableau().iter().enumerate() {
            assert_eq!(pile.len(), column + 1);
            assert!(pile.top().unwrap().face_up);
            assert!(pile.cards()[..column].iter().all(|c| !c.face_up));
        }
        assert_eq!(state.stock().len(), 24);
        assert!(state.stock().iter().all(|c| !c.face_up));
        assert!(state.waste().is_empty());
        assert!(state.foundations().iter().all(Pile::is_empty));
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.cards_in_play(), 52);
    }

    #[test]
    fn test_draw_and_recycle_preserves_order() {
        let mut state = SolitaireState::initialize(&mut GameRng::new(3));
        let mut first_pass = Vec::new();
        while let Ok(StockDraw::Drawn(card)) = state.draw_from_stock() {
            first_pass.push(card);
            if state.stock().is_empty() {
                break;
            }
        }
        assert_eq!(first_pass.len(), 24);
        assert_eq!(state.draw_from_stock(), Ok(StockDraw::Recycled(24)));
        assert!(state.waste().is_empty());
        assert!(state.stock().iter().all(|c| !c.face_up));

        for expected in first_pass {
            assert_eq!(state.draw_from_stock(), Ok(StockDraw::Drawn(expected)));
        }
    }

    #[test]
    fn test_empty_stock_and_waste() {
        let mut state = SolitaireState::from_layout(SolitaireConfig::default(), nearly_won()).unwrap();
        let before = state.clone();
        assert_eq!(state.draw_from_stock(), Err(RuleError::EmptySource("stock")));
        assert_eq!(state, before);
    }

    #[test]
    fn test_winning_move_sets_won() {
        let mut state = SolitaireState::from_layout(SolitaireConfig::default(), nearly_won()).unwrap();
        for column in 0..4 {
            assert!(state.auto_move_card(CardRef::new(PileId::Tableau(column), 0)));
        }
        assert!(state.is_won());
        assert_eq!(state.result(), Some(GameResult::Winner(Side::Player)));

        let frozen = state.clone();
        let back = CardRef::new(PileId::Foundation(0), 12);
        assert!(!state.move_card(back, PileId::Tableau(0)));
        assert_eq!(state.draw_from_stock(), Err(RuleError::GameOver));
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_layout_validation() {
        let mut layout = nearly_won();
        layout.tableau[0].clear();
        assert!(matches!(
            SolitaireState::from_layout(SolitaireConfig::default(), layout),
            Err(RuleError::InvalidLayout(_))
        ));

        let mut layout = nearly_won();
        layout.waste.push(c(Suit::Heart, 13));
        assert!(SolitaireState::from_layout(SolitaireConfig::default(), layout).is_err());
    }

    #[test]
    fn test_layout_rejects_out_of_order_foundation() {
        let mut layout = Layout::default();
        for (f, suit) in Suit::STANDARD.into_iter().enumerate() {
            layout.foundations[f] = [1, 3, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]
                .into_iter()
                .map(|v| c(suit, v).revealed())
                .collect();
        }
        assert!(matches!(
            SolitaireState::from_layout(SolitaireConfig::default(), layout),
            Err(RuleError::InvalidLayout(_))
        ));

        let mut layout = nearly_won();
        layout.foundations.swap(0, 1);
        layout.foundations[0].swap(3, 4);
        assert!(SolitaireState::from_layout(SolitaireConfig::default(), layout).is_err());
    }

    #[test]
    fn test_face_down_card_cannot_be_selected() {
        let mut state = SolitaireState::initialize(&mut GameRng::new(42));
        let hidden = CardRef::new(PileId::Tableau(6), 0);
        assert_eq!(state.select_card(hidden), Err(RuleError::invalid("card is face down")));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_legal_moves_are_all_applicable() {
        let state = SolitaireState::initialize(&mut GameRng::new(11));
        for mv in state.legal_moves() {
            let mut copy = state.clone();
            assert!(copy.apply(mv).is_ok(), "{} should apply", mv);
            assert_eq!(copy.cards_in_play(), 52);
        }
    }
}
