//! Movement domain: pickups, doors, and hazards reached through the interact box.

use bevy::prelude::*;

use crate::level::{Level, PropKind};
use crate::movement::{Character, LastAction};

/// Flag the character dead when a spike overlaps its interact box.
pub(crate) fn check_hazards(character: &mut Character, level: &Level) {
    let hit = level
        .props
        .iter()
        .any(|p| p.kind == PropKind::Spike && p.hitbox.overlaps(&character.interact_box));

    if hit && !character.is_dead {
        debug!("Character touched a hazard in {}", level.name);
        character.is_dead = true;
    }
}

/// Move every pickable prop within reach into the inventory.
pub(crate) fn pick_up_props(character: &mut Character, level: &mut Level) {
    let mut picked = false;

    // Reverse order keeps the remaining indices valid while removing.
    for i in (0..level.props.len()).rev() {
        let prop = &level.props[i];
        if !prop.pickable || !prop.hitbox.overlaps(&character.interact_box) {
            continue;
        }

        let prop = level.props.remove(i);
        debug!("Picked up {:?}", prop.kind);
        character.inventory.push(prop);
        character.last_action = LastAction::PickupProp;
        picked = true;
    }

    if picked {
        level.load_collisionables();
    }
}

/// Open closed doors within reach, spending one key per door.
pub(crate) fn open_doors(character: &mut Character, level: &mut Level) {
    let mut opened = false;

    for door in level.props.iter_mut() {
        if door.kind != PropKind::Door
            || door.is_open
            || !door.hitbox.overlaps(&character.interact_box)
        {
            continue;
        }

        let Some(key) = character
            .inventory
            .iter()
            .position(|p| p.kind == PropKind::Key)
        else {
            debug!("Door in {} needs a key", level.name);
            break;
        };

        if door.open() {
            character.inventory.remove(key);
            opened = true;
            info!("Opened a door in {}", level.name);
        }
    }

    if opened {
        level.load_collisionables();
    }
}
