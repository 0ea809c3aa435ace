//! Card placement: deciding which stack a played item joins.
//!
//! Automatic placement follows fixed tie-breaks. With autoload on, ammo
//! goes to the shotgun with the fewest rounds and a shotgun picks up the
//! loose ammo stack with the most rounds. With autobuild on, a hay bale
//! joins the incomplete wall with the most bales. Ties go to the lowest
//! stack index.
//!
//! Without automation some lone candidates are still taken silently: a
//! lone unloaded shotgun receives ammo, and a lone single bale receives a
//! second bale. Everything else ambiguous becomes `NeedsChoice`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Farm, Stack};
use crate::cards::FarmItem;
use crate::core::PlayChoices;

/// Result of playing an item to a farm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The item is on the farm, in stack `stack`.
    Placed { stack: usize },
    /// The player must pick one of `candidates` or start a new stack.
    NeedsChoice {
        candidates: SmallVec<[usize; 4]>,
        reason: String,
    },
}

impl PlacementOutcome {
    fn choice(candidates: SmallVec<[usize; 4]>, reason: &str) -> Self {
        PlacementOutcome::NeedsChoice {
            candidates,
            reason: reason.to_string(),
        }
    }
}

impl Farm {
    /// Place `item`, asking for a choice only when automation can't decide.
    ///
    /// ```
    /// use zombie_chickens::cards::FarmItem;
    /// use zombie_chickens::core::PlayChoices;
    /// use zombie_chickens::farm::{Farm, PlacementOutcome, Stack};
    ///
    /// let mut farm = Farm::with_stacks([
    ///     Stack::single(FarmItem::HayBale),
    ///     Stack::from_items([FarmItem::HayBale, FarmItem::HayBale]),
    /// ]);
    /// let outcome = farm.place_card(FarmItem::HayBale, PlayChoices::default());
    /// assert_eq!(outcome, PlacementOutcome::Placed { stack: 1 });
    /// ```
    pub fn place_card(&mut self, item: FarmItem, choices: PlayChoices) -> PlacementOutcome {
        if self.stacks.is_empty() {
            return self.place_in(item, None);
        }
        match item {
            FarmItem::Scarecrow | FarmItem::BoobyTrap | FarmItem::Shield | FarmItem::FarmWiper => {
                self.place_in(item, None)
            }
            FarmItem::Flamethrower => {
                let target = self.find(|s| s.has(FarmItem::Fuel) && !s.has(FarmItem::Flamethrower));
                self.place_in(item, target)
            }
            FarmItem::Fuel => {
                let target = self.find(|s| s.has(FarmItem::Flamethrower) && !s.has(FarmItem::Fuel));
                self.place_in(item, target)
            }
            FarmItem::Shotgun => self.place_shotgun(choices),
            FarmItem::Ammo => self.place_ammo(choices),
            FarmItem::HayBale => self.place_hay_bale(choices),
        }
    }

    /// Put `item` in stack `target`, or in a new stack for `None`.
    ///
    /// Used to settle a `NeedsChoice`; the target must be one of its
    /// candidates. An out-of-range target starts a new stack.
    pub fn place_in(&mut self, item: FarmItem, target: Option<usize>) -> PlacementOutcome {
        if let Some(i) = target.filter(|&i| i < self.stacks.len()) {
            self.stacks[i].push(item);
            return PlacementOutcome::Placed { stack: i };
        }
        self.stacks.push(Stack::single(item));
        PlacementOutcome::Placed {
            stack: self.stacks.len() - 1,
        }
    }

    fn place_shotgun(&mut self, choices: PlayChoices) -> PlacementOutcome {
        let loose = self.indices(Stack::is_ammo_only);
        if loose.is_empty() {
            return self.place_in(FarmItem::Shotgun, None);
        }
        if !choices.autoload_shotgun {
            return PlacementOutcome::choice(
                loose,
                "choose to load shotgun with ammo or start new stack",
            );
        }
        let target = self.best(&loose, |s| s.count(FarmItem::Ammo), |a, b| a > b);
        self.place_in(FarmItem::Shotgun, Some(target))
    }

    fn place_ammo(&mut self, choices: PlayChoices) -> PlacementOutcome {
        let shotguns = self.indices(|s| s.has(FarmItem::Shotgun));
        if shotguns.is_empty() {
            let target = self.find(|s| s.is_ammo_only() && s.count(FarmItem::Ammo) == 1);
            return self.place_in(FarmItem::Ammo, target);
        }
        if choices.autoload_shotgun {
            let target = self.best(&shotguns, |s| s.count(FarmItem::Ammo), |a, b| a < b);
            return self.place_in(FarmItem::Ammo, Some(target));
        }
        if shotguns.len() > 1 {
            return PlacementOutcome::choice(shotguns, "choose which shotgun to load with ammo");
        }
        if self.stacks[shotguns[0]].count(FarmItem::Ammo) == 0 {
            return self.place_in(FarmItem::Ammo, Some(shotguns[0]));
        }
        PlacementOutcome::choice(shotguns, "choose to load shotgun or start new ammo stack")
    }

    fn place_hay_bale(&mut self, choices: PlayChoices) -> PlacementOutcome {
        let walls = self.indices(Stack::is_incomplete_wall);
        if walls.is_empty() {
            return self.place_in(FarmItem::HayBale, None);
        }
        if choices.auto_build_hay_wall {
            let target = self.best(&walls, |s| s.count(FarmItem::HayBale), |a, b| a > b);
            return self.place_in(FarmItem::HayBale, Some(target));
        }
        if walls.len() > 1 {
            return PlacementOutcome::choice(walls, "choose which hay wall to build");
        }
        if self.stacks[walls[0]].count(FarmItem::HayBale) == 1 {
            return self.place_in(FarmItem::HayBale, Some(walls[0]));
        }
        PlacementOutcome::choice(walls, "choose to complete wall or start new one")
    }

    fn find(&self, pred: impl Fn(&Stack) -> bool) -> Option<usize> {
        self.stacks.iter().position(pred)
    }

    fn indices(&self, pred: impl Fn(&Stack) -> bool) -> SmallVec<[usize; 4]> {
        self.stacks
            .iter()
            .enumerate()
            .filter(|(_, s)| pred(s))
            .map(|(i, _)| i)
            .collect()
    }

    /// First candidate whose key strictly beats every earlier one.
    fn best(
        &self,
        candidates: &[usize],
        key: impl Fn(&Stack) -> usize,
        better: impl Fn(usize, usize) -> bool,
    ) -> usize {
        let mut best = candidates[0];
        let mut best_key = key(&self.stacks[best]);
        for &i in &candidates[1..] {
            let k = key(&self.stacks[i]);
            if better(k, best_key) {
                best = i;
                best_key = k;
            }
        }
        best
    }
}
