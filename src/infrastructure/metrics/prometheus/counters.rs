use metrics::counter;

/// Increment the counter of success envelopes sent, labelled by status.
pub fn increment_envelope_sent(status: u16) {
    counter!("envelope_responses_total", "status" => status.to_string()).increment(1);
}
