//! Audio playback service for timer completion alerts
//!
//! Runs in a background task, receiving AlertEvents via channel.
//! TTS is only available on Windows/macOS - Linux falls back to espeak.
//! Every delivery failure is swallowed: a missed alert must never affect
//! timer accounting.

use std::f32::consts::PI;

use tokio::sync::mpsc;

use super::events::AlertEvent;

/// Sample rate for the synthesized completion tone
const TONE_SAMPLE_RATE: u32 = 44_100;
/// Tone pitch in hertz
const TONE_FREQUENCY: f32 = 880.0;
/// Tone length in seconds
const TONE_DURATION: f32 = 0.5;
/// Exponential decay constant; larger means a faster fade-out
const TONE_DECAY: f32 = 8.0;

/// Audio service that handles speech and tone playback
pub struct AlertService {
    /// Channel to receive alert events
    event_rx: mpsc::Receiver<AlertEvent>,

    /// Drop all events without playing anything
    muted: bool,

    /// TTS engine (None if initialization failed or unavailable on platform)
    #[cfg(not(target_os = "linux"))]
    tts: Option<tts::Tts>,
}

impl AlertService {
    /// Create a new alert service
    pub fn new(event_rx: mpsc::Receiver<AlertEvent>, muted: bool) -> Self {
        #[cfg(not(target_os = "linux"))]
        let tts = {
            // Try to initialize TTS, gracefully handle failure
            match tts::Tts::default() {
                Ok(mut engine) => {
                    // Completion phrases read better slightly below normal rate
                    let slowed = engine.normal_rate()
                        - (engine.normal_rate() - engine.min_rate()) * 0.1;
                    let _ = engine.set_rate(slowed);
                    Some(engine)
                }
                Err(_) => None,
            }
        };

        Self {
            event_rx,
            muted,
            #[cfg(not(target_os = "linux"))]
            tts,
        }
    }

    /// Run the alert service (blocking async loop)
    pub async fn run(mut self) {
        while let Some(event) = self.event_rx.recv().await {
            if self.muted {
                continue;
            }

            match event {
                AlertEvent::Speak { text } => self.speak(&text),
                AlertEvent::Tone => play_tone(),
            }
        }
    }

    /// Speak text using TTS
    #[cfg(not(target_os = "linux"))]
    fn speak(&mut self, text: &str) {
        if let Some(ref mut tts) = self.tts {
            let _ = tts.speak(text, false);
        }
    }

    /// Speak text using espeak (Linux has no TTS crate support here)
    #[cfg(target_os = "linux")]
    fn speak(&mut self, text: &str) {
        use std::process::Command;
        let text = text.to_string();
        std::thread::spawn(move || {
            // -s 140 is a touch slower than the espeak default
            let _ = Command::new("espeak").args(["-s", "140"]).arg(&text).output();
        });
    }
}

/// Play the completion tone: a short sine pulse with a fast exponential
/// decay. Playback failures (no output device, blocked audio) are ignored.
fn play_tone() {
    std::thread::spawn(|| {
        use rodio::buffer::SamplesBuffer;
        use rodio::{OutputStream, Sink};

        let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
            return;
        };
        let Ok(sink) = Sink::try_new(&stream_handle) else {
            return;
        };

        let sample_count = (TONE_SAMPLE_RATE as f32 * TONE_DURATION) as usize;
        let samples: Vec<f32> = (0..sample_count)
            .map(|i| {
                let t = i as f32 / TONE_SAMPLE_RATE as f32;
                (2.0 * PI * TONE_FREQUENCY * t).sin() * (-TONE_DECAY * t).exp() * 0.4
            })
            .collect();

        sink.append(SamplesBuffer::new(1, TONE_SAMPLE_RATE, samples));
        sink.sleep_until_end();
    });
}

/// Sender handle for sending alert events
pub type AlertSender = mpsc::Sender<AlertEvent>;

/// Create a new alert channel
pub fn create_alert_channel() -> (AlertSender, mpsc::Receiver<AlertEvent>) {
    // Buffer size of 64 should be plenty for alert events
    mpsc::channel(64)
}
