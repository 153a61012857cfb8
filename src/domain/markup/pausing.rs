use super::matcher::Segment;
use super::settings::{clamp_or, PAUSE_INTENSITY_RANGE};
use once_cell::sync::Lazy;
use regex::Regex;

/// At or below this intensity vendor-default pausing is left alone
pub const PAUSE_NOOP_THRESHOLD: f64 = 0.2;
/// Commas only get explicit pauses above this intensity
pub const COMMA_PAUSE_THRESHOLD: f64 = 0.5;

const SENTENCE_PAUSE_BASE_MS: f64 = 400.0;
const SENTENCE_PAUSE_SPAN_MS: f64 = 480.0;
const COMMA_PAUSE_BASE_MS: f64 = 200.0;
const COMMA_PAUSE_SPAN_MS: f64 = 240.0;

// A whole punctuation run, any closing quotes or brackets, then the
// whitespace after it, so "?!" or "..." is never split
static PUNCTUATION_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:[.!?]+|,+)["'”’»)\]]*\s+"#).expect("valid punctuation pattern")
});

pub fn sentence_pause_ms(intensity: f64) -> u32 {
    (SENTENCE_PAUSE_BASE_MS + SENTENCE_PAUSE_SPAN_MS * intensity).round() as u32
}

pub fn comma_pause_ms(intensity: f64) -> u32 {
    (COMMA_PAUSE_BASE_MS + COMMA_PAUSE_SPAN_MS * intensity).round() as u32
}

/// Byte offsets (just past the trailing whitespace) and durations of the
/// pauses to insert into `text`
fn pause_points(text: &str, intensity: f64) -> Vec<(usize, u32)> {
    let intensity = clamp_or(intensity, PAUSE_INTENSITY_RANGE, 0.5);
    if intensity <= PAUSE_NOOP_THRESHOLD {
        return Vec::new();
    }

    let with_commas = intensity > COMMA_PAUSE_THRESHOLD;
    PUNCTUATION_RUN
        .find_iter(text)
        .filter_map(|mat| {
            if mat.as_str().starts_with(',') {
                with_commas.then(|| (mat.end(), comma_pause_ms(intensity)))
            } else {
                Some((mat.end(), sentence_pause_ms(intensity)))
            }
        })
        .collect()
}

pub fn break_tag(millis: u32) -> String {
    format!(r#"<break time="{}ms"/>"#, millis)
}

/// Plain-text form: `text` with `<break>` directives after sentence (and, at
/// high intensity, clause) punctuation. Everything else is left byte for
/// byte, including characters that still need escaping.
pub fn insert_pausing(text: &str, intensity: f64) -> String {
    let points = pause_points(text, intensity);
    if points.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + points.len() * 24);
    let mut last = 0;
    for (offset, millis) in points {
        result.push_str(&text[last..offset]);
        result.push_str(&break_tag(millis));
        last = offset;
    }
    result.push_str(&text[last..]);
    result
}

/// Pipeline form.
///
/// Precondition: phoneme spans are already `Term` segments. Only `Text`
/// segments are scanned, so a pause can never land inside an override span
/// or its attribute text. Escaping happens later, at render time.
pub fn insert_pauses<'a>(segments: Vec<Segment<'a>>, intensity: f64) -> Vec<Segment<'a>> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        let Segment::Text(text) = segment else {
            result.push(segment);
            continue;
        };

        let mut last = 0;
        for (offset, millis) in pause_points(text, intensity) {
            result.push(Segment::Text(&text[last..offset]));
            result.push(Segment::Pause { millis });
            last = offset;
        }
        if last < text.len() {
            result.push(Segment::Text(&text[last..]));
        }
    }

    result
}
