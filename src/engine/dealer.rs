use std::collections::BTreeMap;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::SeatIndex;
use crate::eval::{evaluate_best_hand, resolve_showdown, HandEvaluation, Showdown};

use super::errors::DealError;
use super::RandomSource;

pub const MIN_PLAYERS: usize = 2;
/// 52 карты − 5 на борд = 47, по 2 на игрока.
pub const MAX_PLAYERS: usize = 23;

/// Сколько карманных карт у каждого игрока.
const HOLE_CARDS: usize = 2;

/// Дилер одной раздачи: колода, карманные карты по местам и борд.
///
/// Места нумеруются 0..players. Сам дилер ничего не решает про ставки,
/// он только раздаёт карты и собирает шоудаун.
#[derive(Clone, Debug)]
pub struct Dealer {
    deck: Deck,
    hole_cards: Vec<Vec<Card>>,
    board: Vec<Card>,
    street: Street,
}

impl Dealer {
    pub fn new<R: RandomSource>(players: usize, rng: &mut R) -> Result<Self, DealError> {
        if players < MIN_PLAYERS {
            return Err(DealError::NotEnoughPlayers(players));
        }
        if players > MAX_PLAYERS {
            return Err(DealError::TooManyPlayers(players));
        }

        Ok(Self {
            deck: Deck::shuffled(rng),
            hole_cards: vec![Vec::with_capacity(HOLE_CARDS); players],
            board: Vec::with_capacity(Street::River.board_len()),
            street: Street::Preflop,
        })
    }

    pub fn players(&self) -> usize {
        self.hole_cards.len()
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Карманные карты места (пустой срез, если ещё не розданы).
    pub fn hole_cards(&self, seat: SeatIndex) -> Option<&[Card]> {
        self.hole_cards.get(seat as usize).map(Vec::as_slice)
    }

    /// Раздать по две карты каждому: два круга по столу, по одной карте за круг.
    pub fn deal_hole_cards(&mut self) -> Result<(), DealError> {
        if self.hole_cards.iter().any(|h| !h.is_empty()) {
            return Err(DealError::HoleCardsAlreadyDealt);
        }
        if self.deck.len() < HOLE_CARDS * self.players() {
            return Err(DealError::DeckExhausted);
        }

        for _ in 0..HOLE_CARDS {
            for hand in self.hole_cards.iter_mut() {
                let card = self.deck.draw_one().ok_or(DealError::DeckExhausted)?;
                hand.push(card);
            }
        }

        log::debug!("dealer: hole cards dealt to {} seats", self.players());
        Ok(())
    }

    /// Открыть следующую улицу: флоп (3 карты), тёрн (1), ривер (1).
    pub fn deal_next_street(&mut self) -> Result<Street, DealError> {
        let next = self.street.next().ok_or(DealError::BoardFull)?;
        let count = next.board_len() - self.board.len();

        let cards = self.deck.draw_n(count).ok_or(DealError::DeckExhausted)?;
        self.board.extend(cards);
        self.street = next;

        log::debug!(
            "dealer: {:?} → board {}",
            next,
            self.board
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(next)
    }

    /// Докрутить борд до ривера (с любой улицы до ривера).
    pub fn deal_to_river(&mut self) -> Result<(), DealError> {
        while self.street < Street::River {
            self.deal_next_street()?;
        }
        Ok(())
    }

    /// Оценить руку каждого места на текущем борде.
    ///
    /// Нужен хотя бы флоп: до него в пуле меньше 5 карт.
    pub fn evaluate_all(&self) -> Result<BTreeMap<SeatIndex, HandEvaluation>, DealError> {
        if self.hole_cards.iter().any(|h| h.is_empty()) {
            return Err(DealError::HoleCardsNotDealt);
        }

        let mut evaluations = BTreeMap::new();
        for (seat, hole) in self.hole_cards.iter().enumerate() {
            let eval = evaluate_best_hand(hole, &self.board)?;
            evaluations.insert(seat as SeatIndex, eval);
        }
        Ok(evaluations)
    }

    /// Оценить все руки и определить победителей текущего борда.
    pub fn showdown(&self) -> Result<Showdown<SeatIndex>, DealError> {
        let evaluations = self.evaluate_all()?;
        Ok(resolve_showdown(&evaluations)?)
    }

    /// Собрать карты и взять новую перемешанную колоду.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        self.deck = Deck::shuffled(rng);
        self.board.clear();
        for hand in self.hole_cards.iter_mut() {
            hand.clear();
        }
        self.street = Street::Preflop;
    }
}
