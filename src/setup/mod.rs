//! Character setup view.
//!
//! Generates a handful of random "similar wizards" and renders them into the
//! setup dialog from an HTML `<template>`. Generation is plain Rust over any
//! `rand::Rng`; only [`dom`] touches the page.

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SetupConfig;

pub mod dom;

pub use dom::{render_wizard, render_wizards_fragment, show_setup_view};

/// One randomized wizard, ready to be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WizardDescriptor {
    pub name: String,
    pub coat_color: String,
    pub eyes_color: String,
}

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Run `f` with the view's shared generator.
pub fn with_rng<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
    RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Uniformly pick one entry of `pool`. Panics on an empty pool.
pub fn random_item<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// First name and last name joined by a space; a coin flip swaps the order.
pub fn random_wizard_name<R: Rng + ?Sized>(config: &SetupConfig, rng: &mut R) -> String {
    let mut parts = [
        random_item(&config.first_names, rng).as_str(),
        random_item(&config.last_names, rng).as_str(),
    ];
    if rng.gen_bool(0.5) {
        parts.reverse();
    }
    parts.join(" ")
}

pub fn create_wizard<R: Rng + ?Sized>(config: &SetupConfig, rng: &mut R) -> WizardDescriptor {
    WizardDescriptor {
        name: random_wizard_name(config, rng),
        coat_color: random_item(&config.coat_colors, rng).clone(),
        eyes_color: random_item(&config.eyes_colors, rng).clone(),
    }
}

/// Clamp a host-supplied count; anything below zero means none.
pub fn wizard_count(requested: i32) -> usize {
    requested.max(0) as usize
}

pub fn create_wizards<R: Rng + ?Sized>(
    config: &SetupConfig,
    count: usize,
    rng: &mut R,
) -> Vec<WizardDescriptor> {
    (0..count).map(|_| create_wizard(config, rng)).collect()
}
