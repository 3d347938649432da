//! Tap sound using the Web Audio API
//!
//! Procedurally generated, no audio files. The context is created lazily on
//! the first hit, since browsers only allow audio after a user gesture.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Tap tone pitch (Hz)
const TAP_FREQ: f32 = 800.0;
/// Starting gain at full volume
const TAP_GAIN: f32 = 0.2;
/// Tone length (seconds)
const TAP_DURATION: f64 = 0.1;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
    failed: bool,
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        Self {
            ctx: None,
            volume: volume.clamp(0.0, 1.0),
            failed: false,
        }
    }

    /// Set volume (0.0 - 1.0); 0 mutes
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    fn context(&mut self) -> Option<&AudioContext> {
        if self.ctx.is_none() && !self.failed {
            match AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(_) => {
                    // Not in a secure context, or audio blocked
                    log::warn!("Failed to create AudioContext - audio disabled");
                    self.failed = true;
                }
            }
        }
        self.ctx.as_ref()
    }

    /// Short sine blip played on every hit
    pub fn play_tap(&mut self) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = self.context() else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = create_osc(ctx, TAP_FREQ, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        osc.frequency().set_value_at_time(TAP_FREQ, t).ok();
        gain.gain().set_value_at_time(TAP_GAIN * vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + TAP_DURATION)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + TAP_DURATION).ok();
    }
}

/// Create an oscillator routed through a gain node to the speakers
fn create_osc(
    ctx: &AudioContext,
    freq: f32,
    osc_type: OscillatorType,
) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}
