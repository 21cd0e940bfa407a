//! Per-visitor widget state kept between render cycles

use crate::catalog;

/// Values the selection control and the question box held on the last cycle
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub selected: Vec<String>,
    pub question: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected: catalog::default_selection(),
            question: String::new(),
        }
    }
}
