//! Hover publication channel.
//!
//! The engine publishes the latest hover state after every pointer move or
//! camera change; the embedding UI reads at its own pace. Backed by a
//! wait-free triple buffer, so neither side ever blocks the other and the
//! reader always sees the most recent value.

use glam::Vec3;

use crate::curve::CurveParameters;

/// A figure currently under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverHit {
    /// Name of the hovered figure.
    pub name: String,
    /// The parameters the hovered figure was built with.
    pub parameters: CurveParameters,
    /// The figure's world position at publication time.
    pub position: Vec3,
}

/// The published hover state: the hovered figure, or nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    /// Current hit, `None` when the pointer is over empty space.
    pub hit: Option<HoverHit>,
}

impl HoverState {
    /// Whether a figure is hovered.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hit.is_some()
    }
}

/// Create a hover channel: the engine keeps the publisher, the embedding
/// UI keeps the reader.
#[must_use]
pub fn hover_channel() -> (HoverPublisher, HoverReader) {
    let (input, output) = triple_buffer::triple_buffer(&HoverState::default());
    (HoverPublisher { input }, HoverReader { output })
}

/// Write side of the hover channel. Latest value wins.
pub struct HoverPublisher {
    input: triple_buffer::Input<HoverState>,
}

impl HoverPublisher {
    /// Publish a new hover state, replacing any unread previous value.
    pub fn publish(&mut self, state: HoverState) {
        self.input.write(state);
    }

    /// Publish the empty state.
    pub fn publish_cleared(&mut self) {
        self.publish(HoverState::default());
    }
}

/// Read side of the hover channel.
pub struct HoverReader {
    output: triple_buffer::Output<HoverState>,
}

impl HoverReader {
    /// The most recently published state.
    pub fn latest(&mut self) -> &HoverState {
        self.output.read()
    }

    /// Whether a publication happened since the last read. Consumes the
    /// update, so the next [`Self::latest`] sees the new value.
    pub fn has_update(&mut self) -> bool {
        self.output.update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_starts_empty() {
        let (_publisher, mut reader) = hover_channel();
        assert!(!reader.latest().is_hovering());
    }

    #[test]
    fn test_latest_value_wins() {
        let (mut publisher, mut reader) = hover_channel();
        for i in 0..3 {
            publisher.publish(HoverState {
                hit: Some(HoverHit {
                    name: format!("lissajous-group-{i}"),
                    parameters: CurveParameters::default(),
                    position: Vec3::ZERO,
                }),
            });
        }
        let latest = reader.latest();
        assert_eq!(
            latest.hit.as_ref().map(|h| h.name.as_str()),
            Some("lissajous-group-2")
        );
    }

    #[test]
    fn test_cleared_overwrites_a_hit() {
        let (mut publisher, mut reader) = hover_channel();
        publisher.publish(HoverState {
            hit: Some(HoverHit {
                name: "lissajous-single".into(),
                parameters: CurveParameters::default(),
                position: Vec3::ONE,
            }),
        });
        assert!(reader.latest().is_hovering());

        publisher.publish_cleared();
        assert!(!reader.latest().is_hovering());
    }

    #[test]
    fn test_has_update_tracks_publications() {
        let (mut publisher, mut reader) = hover_channel();
        let _ = reader.latest();
        assert!(!reader.has_update());
        publisher.publish_cleared();
        assert!(reader.has_update());
        assert!(!reader.has_update());
    }
}
