use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::play::{Play, PlayId};
use crate::scoreboard::Scoreboard;
use crate::side::Side;

// Match date, venue and display names. Supplied by the caller; read-only to
// the core. The original deployments stored team names client-side only, so
// they are part of the meta, not the play records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameMeta {
    pub date: Date,
    pub venue: String,
    pub team_names: EnumMap<Side, String>,
}

impl GameMeta {
    pub fn team_name(&self, side: Side) -> &str { &self.team_names[side] }
}

// The committed play list: the single source of truth for the scoreboard.
// Plays are ordered by `seq`; append-or-replace is keyed by `id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    meta: GameMeta,
    plays: Vec<Play>,
    next_seq: u64,
}

impl Game {
    pub fn new(meta: GameMeta) -> Self {
        Game { meta, plays: Vec::new(), next_seq: 1 }
    }

    pub fn meta(&self) -> &GameMeta { &self.meta }
    pub fn plays(&self) -> &[Play] { &self.plays }

    pub fn play(&self, id: &PlayId) -> Option<&Play> {
        self.plays.iter().find(|play| play.id == *id)
    }

    // Commits a draft: appends with the next `seq`, or replaces in place when
    // a play with the same id was committed before (edit-then-recommit). A
    // replaced play keeps its `seq`, so the log order is stable.
    pub fn commit(&mut self, mut draft: Play) -> PlayId {
        let id = draft.id.clone();
        match self.plays.iter_mut().find(|play| play.id == draft.id) {
            Some(slot) => {
                draft.seq = slot.seq;
                log::debug!("play {} recommitted", id.as_str());
                *slot = draft;
            }
            None => {
                draft.seq = self.next_seq;
                self.next_seq += 1;
                self.plays.push(draft);
            }
        }
        id
    }

    pub fn remove(&mut self, id: &PlayId) -> bool {
        let len_before = self.plays.len();
        self.plays.retain(|play| play.id != *id);
        let removed = self.plays.len() != len_before;
        if !removed {
            log::warn!("remove: no play with id {}", id.as_str());
        }
        removed
    }

    // Wholesale replacement on an external load. The store is responsible for
    // ordering, but re-sort defensively in case it did not.
    pub fn reload(&mut self, mut plays: Vec<Play>) {
        plays.sort_by_key(|play| play.seq);
        self.next_seq = plays.last().map_or(1, |play| play.seq + 1);
        self.plays = plays;
    }

    // Single-record external update (subscription event). Last writer for a
    // given id wins; an unseen id is inserted at its `seq` position.
    pub fn apply_update(&mut self, play: Play) {
        match self.plays.iter_mut().find(|existing| existing.id == play.id) {
            Some(slot) => {
                log::debug!("play {} overwritten by external update", play.id.as_str());
                *slot = play;
            }
            None => {
                self.next_seq = self.next_seq.max(play.seq + 1);
                let at = self.plays.partition_point(|existing| existing.seq <= play.seq);
                self.plays.insert(at, play);
            }
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::from_plays(&self.plays)
    }
}
