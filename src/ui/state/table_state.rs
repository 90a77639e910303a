use std::collections::VecDeque;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::table::SortConfig;
use crate::usecase::services::mutation_service::ChangeEvent;

/// Search and sort inputs of one admin table. Page state lives in `DataTable`.
pub struct TableState {
    pub search_term: Signal<String>,
    pub sort: Signal<SortConfig>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            search_term: use_signal(String::new),
            sort: use_signal(SortConfig::default),
            busy: use_signal(|| false),
            status: use_signal(String::new),
        }
    }
}

const CHANGE_LOG_CAPACITY: usize = 64;

/// Recent change events published by any page, numbered so each list
/// reacts to an event at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeLog {
    sequence: u64,
    recent: VecDeque<(u64, ChangeEvent)>,
}

impl ChangeLog {
    pub fn publish(&mut self, event: ChangeEvent) {
        self.sequence += 1;
        self.recent.push_back((self.sequence, event));
        while self.recent.len() > CHANGE_LOG_CAPACITY {
            self.recent.pop_front();
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Whether events numbered after `seen` were evicted before being read.
    pub fn lost_since(&self, seen: u64) -> bool {
        self.recent
            .front()
            .is_some_and(|(oldest, _)| *oldest > seen + 1)
    }

    /// Every retained event numbered after `seen`, oldest first.
    pub fn since(&self, seen: u64) -> impl Iterator<Item = &ChangeEvent> + '_ {
        self.recent
            .iter()
            .filter(move |(sequence, _)| *sequence > seen)
            .map(|(_, event)| event)
    }
}
