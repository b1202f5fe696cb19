//! Traversal engine and game rules for the Hatchway dungeon game.
//!
//! A player walks a tree-shaped dungeon, fights monsters for experience,
//! races a decimal time budget, and must collect enough experience to climb
//! out through a hatch. This crate owns every rule of that walk and nothing
//! that touches a terminal or a file.
//!
//! # Modules
//!
//! - [`tokens`] -- Time cost, experience, and hatch tokens in identifiers.
//! - [`budget`] -- The decimal time budget ([`TimeBudget`]).
//! - [`player`] -- Mutable player state and the history recorder.
//! - [`history`] -- Append-only snapshot log and the [`HistorySink`] trait.
//! - [`encounter`] -- Available actions at a location ([`Action`]).
//! - [`combat`] -- Fight resolution ([`CombatReport`]).
//! - [`choice`] -- [`ChoiceSource`] trait and [`ScriptedChoices`].
//! - [`traversal`] -- The engine loop ([`run_traversal`]).
//! - [`config`] -- Configuration loading from `hatchway-config.yaml`.
//!
//! [`TimeBudget`]: budget::TimeBudget
//! [`HistorySink`]: history::HistorySink
//! [`Action`]: encounter::Action
//! [`CombatReport`]: combat::CombatReport
//! [`ChoiceSource`]: choice::ChoiceSource
//! [`ScriptedChoices`]: choice::ScriptedChoices
//! [`run_traversal`]: traversal::run_traversal

pub mod budget;
pub mod choice;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod history;
pub mod player;
pub mod tokens;
pub mod traversal;
