//! Prompt Cards — random writing prompts built from a row of word cards.
//!
//! Cards of six types (actors, actor modifiers, motivators, elements,
//! element modifiers, conflicts) are filled from static word lists and
//! composed, in order, into a single prompt sentence.

pub mod core;
pub mod schema;
