use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::PlayerId;
use crate::eval::{describe_hand, evaluate_best_hand, resolve_winners, EvalError, HandEvaluation};

/// Карта в виде пары чисел: rank 2..14, suit 0..3.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub rank: u8,
    pub suit: u8,
}

impl From<Card> for CardDto {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank.value(),
            suit: card.suit.index() as u8,
        }
    }
}

impl TryFrom<CardDto> for Card {
    type Error = EvalError;

    fn try_from(dto: CardDto) -> Result<Self, Self::Error> {
        let rank = Rank::from_value(dto.rank)
            .ok_or_else(|| EvalError::InvalidInput(format!("Invalid rank value: {}", dto.rank)))?;
        let suit = Suit::from_index(dto.suit)
            .ok_or_else(|| EvalError::InvalidInput(format!("Invalid suit value: {}", dto.suit)))?;
        Ok(Card::new(rank, suit))
    }
}

/// Оценка руки для фронта / сети.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluationDto {
    /// Порядковый номер категории 0..8.
    pub category: u8,
    /// Уровень для отображения, включая "Royal flush".
    pub label: String,
    pub description: String,
    pub primary: u8,
    pub secondary: u8,
    pub kickers: Vec<u8>,
}

impl From<&HandEvaluation> for HandEvaluationDto {
    fn from(eval: &HandEvaluation) -> Self {
        Self {
            category: eval.category().ordinal(),
            label: eval.tier().name().to_string(),
            description: describe_hand(eval),
            primary: eval.primary(),
            secondary: eval.secondary(),
            kickers: eval.kickers().to_vec(),
        }
    }
}

/// Рука одного игрока на шоудауне.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandDto {
    pub player_id: PlayerId,
    pub hole_cards: Vec<CardDto>,
    pub hand: HandEvaluationDto,
    /// Является ли игрок победителем (включая сплит).
    pub is_winner: bool,
}

/// DTO шоудауна: борд, руки всех игроков и победители.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownDto {
    pub board: Vec<CardDto>,
    pub players: Vec<PlayerHandDto>,
    pub winners: Vec<PlayerId>,
    pub split: bool,
}

/// Оценить руки игроков на общем борде и собрать ShowdownDto.
pub fn build_showdown_view(
    board: &[Card],
    players: &[(PlayerId, Vec<Card>)],
) -> Result<ShowdownDto, EvalError> {
    let mut evaluations: BTreeMap<PlayerId, HandEvaluation> = BTreeMap::new();
    for (player_id, hole) in players {
        let eval = evaluate_best_hand(hole, board)?;
        if evaluations.insert(*player_id, eval).is_some() {
            return Err(EvalError::InvalidInput(format!(
                "duplicate player id at showdown: {player_id}"
            )));
        }
    }

    let winners = resolve_winners(&evaluations)?;

    let players = players
        .iter()
        .filter_map(|(player_id, hole)| {
            evaluations.get(player_id).map(|eval| PlayerHandDto {
                player_id: *player_id,
                hole_cards: hole.iter().copied().map(CardDto::from).collect(),
                hand: HandEvaluationDto::from(eval),
                is_winner: winners.contains(player_id),
            })
        })
        .collect();

    Ok(ShowdownDto {
        board: board.iter().copied().map(CardDto::from).collect(),
        players,
        split: winners.len() > 1,
        winners: winners.into_iter().collect(),
    })
}
