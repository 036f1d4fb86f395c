//! Travelling merchant with a rotating stock, paid for in coins.

use crate::config::ShopConfig;
use crate::encounter::rng::SelectionRng;
use crate::roster::Roster;
use schema::{EffectKind, ItemRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopTemplate {
    pub name: String,
    pub price: u32,
    pub sprite_path: String,
    pub description: String,
    #[serde(default)]
    pub effect: Option<(EffectKind, u32)>,
}

impl ShopTemplate {
    fn to_item(&self) -> ItemRecord {
        let item = ItemRecord::new(self.name.clone(), 1).with_sprite(self.sprite_path.clone());
        match self.effect {
            Some((kind, magnitude)) => item.with_effect(kind, magnitude),
            None => item,
        }
    }
}

pub fn default_templates() -> Vec<ShopTemplate> {
    vec![
        ShopTemplate {
            name: "Potion".to_string(),
            price: 50,
            sprite_path: "ingame_ui/potion.png".to_string(),
            description: "Restores 20 HP".to_string(),
            effect: Some((EffectKind::Heal, 20)),
        },
        ShopTemplate {
            name: "Pokeball".to_string(),
            price: 200,
            sprite_path: "ingame_ui/ball.png".to_string(),
            description: "Catch monsters".to_string(),
            effect: None,
        },
    ]
}

/// One row of the shop's current stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopListing {
    pub template: usize,
    pub name: String,
    pub price: u32,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { item: String, coins_left: u32, owned: u32 },
    Rejected(PurchaseRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRejection {
    InvalidSelection,
    OutOfStock,
    NotEnoughCoins,
}

/// Remaining time before the next restock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshCountdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl RefreshCountdown {
    fn from_seconds(remaining: f32) -> Self {
        let total = remaining.max(0.0) as u32;
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for RefreshCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone)]
pub struct Shop {
    templates: Vec<ShopTemplate>,
    listings: Vec<ShopListing>,
    config: ShopConfig,
    coin_item_name: String,
    elapsed_since_refresh: f32,
    selected: usize,
}

impl Shop {
    /// Opens a shop with freshly rolled stock.
    pub fn new(
        templates: Vec<ShopTemplate>,
        config: ShopConfig,
        coin_item_name: impl Into<String>,
        rng: &mut SelectionRng,
    ) -> Self {
        let mut shop = Self {
            templates,
            listings: Vec::new(),
            config,
            coin_item_name: coin_item_name.into(),
            elapsed_since_refresh: 0.0,
            selected: 0,
        };
        shop.refresh(rng);
        shop
    }

    pub fn listings(&self) -> &[ShopListing] {
        &self.listings
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn description(&self, listing: &ShopListing) -> Option<&str> {
        self.templates
            .get(listing.template)
            .map(|template| template.description.as_str())
    }

    /// Re-rolls the stock: between three and five distinct templates, capped
    /// at the number of templates, each with one to three units.
    pub fn refresh(&mut self, rng: &mut SelectionRng) {
        let wanted = (rng.range_inclusive(3, 5, "shop listing count") as usize).min(self.templates.len());

        let mut pool: Vec<usize> = (0..self.templates.len()).collect();
        let mut chosen = Vec::with_capacity(wanted);
        for _ in 0..wanted {
            if let Some(pick) = rng.pick(pool.len(), "shop template") {
                chosen.push(pool.remove(pick));
            }
        }

        self.listings = chosen
            .into_iter()
            .filter_map(|index| {
                let template = self.templates.get(index)?;
                Some(ShopListing {
                    template: index,
                    name: template.name.clone(),
                    price: template.price,
                    stock: 0,
                })
            })
            .collect();
        for listing in &mut self.listings {
            listing.stock = rng.range_inclusive(1, 3, "shop stock");
        }

        self.elapsed_since_refresh = 0.0;
        self.selected = 0;
        tracing::info!("Shop restocked with {} listings", self.listings.len());
    }

    /// Advances the restock clock. Returns true when the stock was re-rolled.
    pub fn update(&mut self, dt: f32, rng: &mut SelectionRng) -> bool {
        self.elapsed_since_refresh += dt.max(0.0);
        if self.elapsed_since_refresh >= self.config.refresh_interval {
            self.refresh(rng);
            return true;
        }
        false
    }

    pub fn time_until_refresh(&self) -> RefreshCountdown {
        RefreshCountdown::from_seconds(self.config.refresh_interval - self.elapsed_since_refresh)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = self.listings.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn buy_selected(&mut self, roster: &mut Roster) -> PurchaseOutcome {
        self.buy(self.selected, roster)
    }

    /// Buys one unit of listing `index`.
    ///
    /// Coins come out of the first coin stack. The item stacks onto the first
    /// record of the same name, or is appended with a count of one.
    pub fn buy(&mut self, index: usize, roster: &mut Roster) -> PurchaseOutcome {
        let Some(listing) = self.listings.get_mut(index) else {
            return PurchaseOutcome::Rejected(PurchaseRejection::InvalidSelection);
        };
        if listing.stock == 0 {
            return PurchaseOutcome::Rejected(PurchaseRejection::OutOfStock);
        }
        if !roster.spend_item(&self.coin_item_name, listing.price) {
            tracing::debug!(
                "Cannot afford {} for {} coins",
                listing.name,
                listing.price
            );
            return PurchaseOutcome::Rejected(PurchaseRejection::NotEnoughCoins);
        }
        listing.stock -= 1;

        let owned = match roster.find_item_mut(&listing.name) {
            Some(item) => {
                item.count = item.count.saturating_add(1);
                item.count
            }
            None => {
                let item = match self.templates.get(listing.template) {
                    Some(template) => template.to_item(),
                    None => ItemRecord::new(listing.name.clone(), 1),
                };
                roster.items.push(item);
                1
            }
        };
        let coins_left = roster.item_count(&self.coin_item_name);

        tracing::info!("Bought {} for {} coins, {} left", listing.name, listing.price, coins_left);
        PurchaseOutcome::Purchased {
            item: listing.name.clone(),
            coins_left,
            owned,
        }
    }
}
