use std::sync::Arc;
use tokio::sync::mpsc;

pub fn contains_response_of_type<T>(responses: &[Arc<T>], variant: &T) -> bool {
    responses
        .iter()
        .any(|msg| std::mem::discriminant(&**msg) == std::mem::discriminant(variant))
}

pub fn count_responses_of_type<T>(responses: &[Arc<T>], variant: &T) -> usize {
    responses
        .iter()
        .filter(|msg| std::mem::discriminant(&***msg) == std::mem::discriminant(variant))
        .count()
}

/// Everything already queued on the channel, without waiting.
pub fn drain_responses<T>(rx: &mut mpsc::UnboundedReceiver<Arc<T>>) -> Vec<Arc<T>> {
    let mut responses = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        responses.push(msg);
    }
    responses
}
