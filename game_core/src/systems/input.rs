use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued inputs to paddle intents
///
/// Later inputs for the same player override earlier ones. Players with no
/// queued input keep their previous intent.
pub fn ingest_inputs(world: &mut World, intents: &mut IntentQueue) {
    if intents.inputs.is_empty() {
        return;
    }

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if let Some((_, axis)) = intents
            .inputs
            .iter()
            .rev()
            .find(|(player_id, _)| *player_id == paddle.player_id)
        {
            intent.set(*axis);
        }
    }

    intents.clear();
}
