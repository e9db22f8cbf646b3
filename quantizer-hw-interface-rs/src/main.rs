//! quantizer-hw-interface
//!
//! Single-channel pitch quantizer firmware for the Raspberry Pi Pico 2.
//! Wires the `pitch-quantizer` library to the board:
//!
//! 1. The sampler task wakes on a fixed-rate ticker and reads the pitch CV
//!    from ADC0.
//! 2. The reading is converted to pitch units, quantized by the channel's
//!    `QuantizerChannel` and converted to a DAC code.
//! 3. The code drives a PWM output, filtered to a voltage off-board.
//! 4. The scale button task steps the channel through every scale in the
//!    registry; the sampler picks up the change on its next tick.
//!
//! Calibration is fixed at the library defaults in this stage.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::{self, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pitch_quantizer::cv::{AdcCalibration, DacCalibration};
use pitch_quantizer::{ChannelConfig, QuantizerChannel, Scales};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing of the sample loop and resolution of the PWM output.
#[derive(Debug, Clone, Copy, Format)]
pub struct SamplerConfig {
    /// Samples per second.
    pub sample_rate_hz: u32,
    /// PWM counter top; the duty range is `0..=pwm_top`.
    pub pwm_top: u16,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 8_000,
            pwm_top: 4095,
        }
    }
}

impl SamplerConfig {
    /// Sample period in microseconds.
    pub fn sample_period_us(&self) -> u64 {
        1_000_000 / self.sample_rate_hz.max(1) as u64
    }

    /// Scale a 16-bit DAC code to the PWM duty range.
    pub fn duty(&self, code: u16) -> u16 {
        ((code as u32 * (self.pwm_top as u32 + 1)) >> 16) as u16
    }
}

/// Debounce interval for the scale button.
const BUTTON_DEBOUNCE: Duration = Duration::from_millis(20);

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Everything the sampler and the button task share.
struct QuantizerState {
    scales: Scales,
    config: ChannelConfig,
    channel: QuantizerChannel,
}

/// Written by the button task, read by the sampler every tick.
static STATE: StaticCell<Mutex<CriticalSectionRawMutex, QuantizerState>> = StaticCell::new();

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Fixed-rate sample loop: ADC → quantizer → PWM.
///
/// The state mutex is held across update and process so a codebook rebuild
/// and the sample that follows it see the same configuration.
#[embassy_executor::task]
async fn sampler_task(
    mut adc: Adc<'static, adc::Async>,
    mut cv_in: Channel<'static>,
    mut pwm_out: Pwm<'static>,
    state: &'static Mutex<CriticalSectionRawMutex, QuantizerState>,
    config: SamplerConfig,
) {
    info!("Sampler task started: {}", config);

    let adc_cal = AdcCalibration::default();
    let dac_cal = DacCalibration::default();
    let mut pwm_config = pwm::Config::default();
    pwm_config.top = config.pwm_top;

    let mut ticker = Ticker::every(Duration::from_micros(config.sample_period_us()));
    loop {
        ticker.next().await;

        let raw = match adc.read(&mut cv_in).await {
            Ok(raw) => raw,
            Err(_) => {
                warn!("ADC read failed");
                continue;
            }
        };
        let pitch = adc_cal.pitch(raw);

        let quantized = {
            let mut state = state.lock().await;
            let QuantizerState {
                scales,
                config: channel_config,
                channel,
            } = &mut *state;
            if channel.update(scales, channel_config) {
                debug!("Codebook rebuilt for scale {}", channel_config.scale);
            }
            channel.process(pitch)
        }; // mutex released here

        pwm_config.compare_a = config.duty(dac_cal.to_dac(quantized, 0));
        pwm_out.set_config(&pwm_config);
    }
}

/// Steps to the next scale on every press of the (active-low) scale button.
#[embassy_executor::task]
async fn scale_button_task(
    mut button: Input<'static>,
    state: &'static Mutex<CriticalSectionRawMutex, QuantizerState>,
) {
    info!("Scale button task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(BUTTON_DEBOUNCE).await;
        if button.is_high() {
            continue;
        }

        {
            let mut state = state.lock().await;
            let next = state.scales.next_index(state.config.scale);
            state.config.scale = next;
            match state.scales.name(next) {
                Ok(name) => info!("Scale {}: {}", next, name),
                Err(e) => warn!("Scale {} has no name: {}", next, e),
            }
        }

        button.wait_for_high().await;
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("quantizer-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // CV_IN   → GP26 / ADC0
    // CV_OUT  → GP0   PWM slice 0 channel A, RC-filtered off-board
    // SCALE   → GP15  active-low, pull-up enabled
    // ———————————————————————————————————————————————————————————————————————

    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let cv_in = Channel::new_pin(p.PIN_26, Pull::None);

    let sampler_config = SamplerConfig::default();
    let mut pwm_config = pwm::Config::default();
    pwm_config.top = sampler_config.pwm_top;
    let pwm_out = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, pwm_config);

    let button = Input::new(p.PIN_15, Pull::Up);

    let state = STATE.init(Mutex::new(QuantizerState {
        scales: Scales::new(),
        config: ChannelConfig::default(),
        channel: QuantizerChannel::new(),
    }));

    // —— Spawn tasks ————————————————————————————————————————————————————————

    unwrap!(spawner.spawn(sampler_task(adc, cv_in, pwm_out, state, sampler_config)));
    unwrap!(spawner.spawn(scale_button_task(button, state)));

    info!("All tasks spawned");
}
