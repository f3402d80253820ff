//! Executes side effects returned by the reducer.
//!
//! The runner owns the alignment service and the table's resize
//! subscription; at most one subscription is held at a time.

use color_eyre::eyre::Result;

use tabalign_domain::TableTarget;

use crate::effect::Effect;
use crate::ports::{Renderer, TableHost};
use crate::resize::ResizeSubscription;
use crate::service::AlignmentService;
use crate::state::AppState;

pub struct EffectRunner {
    service: AlignmentService,
    subscription: Option<ResizeSubscription>,
}

impl EffectRunner {
    pub fn new(service: AlignmentService) -> Self {
        Self {
            service,
            subscription: None,
        }
    }

    pub fn service(&self) -> &AlignmentService {
        &self.service
    }

    pub fn run<H: TableHost>(
        &mut self,
        effects: Vec<Effect>,
        host: &mut H,
        renderer: &mut dyn Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        for effect in effects {
            self.run_single(effect, host, renderer, state)?;
        }
        Ok(())
    }

    fn run_single<H: TableHost>(
        &mut self,
        effect: Effect,
        host: &mut H,
        renderer: &mut dyn Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        match effect {
            Effect::Render => {
                renderer.draw(state, &*host)?;
            }
            Effect::ApplyAlignment => {
                self.release_subscription();
                let target = TableTarget::Id(state.table);
                match self.service.apply_alignment(host, &target, &state.columns) {
                    Ok(applied) => self.subscription = applied.subscription,
                    Err(e) => {
                        state.aligned = false;
                        state.message = Some(e.to_string());
                    }
                }
            }
            Effect::RemoveAlignment => {
                self.release_subscription();
                let target = TableTarget::Id(state.table);
                if let Err(e) = self.service.remove_alignment(host, &target) {
                    state.message = Some(e.to_string());
                }
            }
            Effect::ResizeContainer { width_cells } => {
                let cell_px = host.font_context(state.table).cell_advance_px();
                host.set_container_width(state.table, f64::from(width_cells) * cell_px);
                self.service.handle_resize(host, state.table);
            }
        }
        Ok(())
    }

    fn release_subscription(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.service.release(subscription);
        }
    }
}
