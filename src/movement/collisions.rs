//! Movement domain: collision response and play-area wrapping.

use crate::content::PlayArea;
use crate::geometry::{Aabb, HitFace, Overlap};
use crate::level::Direction;
use crate::movement::{Character, MovementTuning};

/// Push the character out of every blocking rectangle it touches, in list order.
///
/// A rectangle counts as touched when it overlaps the hitbox or contains one of the foot probes,
/// so a character resting exactly on the ground stays grounded. Each correction rewrites the
/// hitbox before the next rectangle is tested; later corrections win.
pub(crate) fn resolve_collisions(
    character: &mut Character,
    collisionables: &[Aabb],
    tuning: &MovementTuning,
) {
    character.on_ground = false;

    for fixed in collisionables {
        let probes = character.foot_probes(tuning.foot_probe_inset);
        let touching = character.hitbox.overlaps(fixed)
            || probes.iter().any(|p| fixed.contains_point(*p));
        if !touching {
            continue;
        }

        let Some(face) = Overlap::between(&character.hitbox, fixed).face() else {
            continue;
        };

        let size = character.hitbox.size();
        match face {
            HitFace::Top => {
                character.position.y = fixed.y - size.y;
                character.velocity.y = 0.0;
                character.on_ground = true;
            }
            HitFace::Bottom => {
                character.position.y = fixed.bottom();
                character.velocity.y = 0.0;
            }
            HitFace::Left => {
                character.position.x = fixed.x - size.x;
                character.velocity.x = 0.0;
            }
            HitFace::Right => {
                character.position.x = fixed.right();
                character.velocity.x = 0.0;
            }
        }

        character.update_hitbox(tuning);
    }
}

/// Wrap the character to the opposite edge when it leaves the play area and raise the exit flag
/// for the edge it crossed.
pub(crate) fn wrap_play_area(character: &mut Character, area: PlayArea, tuning: &MovementTuning) {
    let max_x = area.width - character.hitbox.width;
    let max_y = area.height - character.hitbox.height;

    if character.position.x < 0.0 {
        character.position.x = max_x;
        character.exits.set(Direction::West);
    } else if character.position.x > max_x {
        character.position.x = 0.0;
        character.exits.set(Direction::East);
    }

    if character.position.y < 0.0 {
        character.position.y = max_y;
        character.exits.set(Direction::North);
    } else if character.position.y > max_y {
        character.position.y = 0.0;
        character.exits.set(Direction::South);
    }

    character.update_hitbox(tuning);
}
