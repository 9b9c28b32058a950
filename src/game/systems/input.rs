//! Click handling: pointer clicks in, feedback commands out
//!
//! Two systems split the asynchronous pick round trip:
//!
//! 1. [`dispatch_pick_requests`] hands each click to the installed
//!    [`PickOracle`](crate::game::resources::PickOracle) through the
//!    [`PickSlot`], which keeps a single request in flight and drops the rest.
//! 2. [`resolve_pick_results`] polls the slot without blocking and, once the
//!    answer arrives, feeds it through the selection controller.
//!
//! Picks reach the board and the selection only through
//! `resolve_pick_results`, so every transition happens in frame order.

use crate::core::GameSettings;
use crate::game::events::{FeedbackCommand, PointerClick};
use crate::game::resources::*;
use crate::game::rules::has_any_moves;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use tracing::{error, info, warn};

/// Start a pick for each click, unless one is already pending
pub fn dispatch_pick_requests(
    mut clicks: MessageReader<PointerClick>,
    mut slot: ResMut<PickSlot>,
    oracle: Option<Res<PickOracleHandle>>,
) {
    for click in clicks.read() {
        let Some(oracle) = oracle.as_ref() else {
            warn!("[INPUT] No pick oracle installed, ignoring click at ({}, {})", click.x, click.y);
            continue;
        };
        slot.begin(click.x, click.y, oracle.0.as_ref());
    }
}

/// System params for resolving a finished pick
#[derive(SystemParam)]
pub struct PickResolveParams<'w> {
    pub slot: ResMut<'w, PickSlot>,
    pub board: ResMut<'w, GameBoard>,
    pub selection: ResMut<'w, Selection>,
    pub history: ResMut<'w, MoveHistory>,
    pub settings: Res<'w, GameSettings>,
    pub feedback: MessageWriter<'w, FeedbackCommand>,
}

/// Feed a resolved pick through the selection controller
///
/// The board is only marked changed when a move was actually played, so
/// visual systems keyed on `GameBoard` stay idle for selections and misses.
pub fn resolve_pick_results(mut params: PickResolveParams) {
    let PickPoll::Resolved(raw) = params.slot.poll() else {
        return;
    };

    let pick = raw.map(|raw| params.settings.mesh_classes.translate(raw));
    let current = params.selection.clone();
    let mover = current.selected().map(|selected| selected.side);

    let outcome = match handle_pick(&mut params.board.bypass_change_detection().0, current, pick) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("[INPUT] Pick {:?} rejected: {}", pick, e);
            return;
        }
    };

    if let (Some(mv), Some(side)) = (outcome.executed, mover) {
        params.board.set_changed();
        params.history.add_move(MoveRecord { side, mv });
        match mv.captured {
            Some(captured) => info!("[GAME] Side {:?} jumped {:?} -> {:?}, capturing {:?}", side, mv.from, mv.to, captured),
            None => info!("[GAME] Side {:?} moved {:?} -> {:?}", side, mv.from, mv.to),
        }

        let opponent = side.opponent();
        if params.board.count(opponent) == 0 {
            info!("[GAME] Side {:?} has no pieces left", opponent);
        } else if !has_any_moves(&params.board, opponent) {
            info!("[GAME] Side {:?} has no legal moves", opponent);
        }
    }

    params.selection.set_if_neq(outcome.selection);
    for command in outcome.commands {
        params.feedback.write(command);
    }
}
