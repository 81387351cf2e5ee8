use std::pin::pin;
use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;
use warp::hyper::body::Buf;
use warp::{Filter, Rejection};

#[derive(Debug)]
pub struct BodyTooLarge;

impl warp::reject::Reject for BodyTooLarge {}

#[derive(Debug)]
pub struct InvalidJsonBody;

impl warp::reject::Reject for InvalidJsonBody {}

/// JSON body capped at `limit` bytes. A declared `Content-Length` over the
/// limit is rejected up front; chunked bodies are counted while streaming.
pub fn json_body<T>(limit: u64) -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: DeserializeOwned + Send + 'static,
{
    warp::header::optional::<u64>("content-length")
        .and_then(move |declared: Option<u64>| async move {
            match declared {
                Some(length) if length > limit => Err(warp::reject::custom(BodyTooLarge)),
                _ => Ok(()),
            }
        })
        .untuple_one()
        .and(warp::body::stream())
        .and_then(move |body| async move {
            let bytes = read_capped(body, limit).await?;
            serde_json::from_slice::<T>(&bytes).map_err(|e| {
                log::debug!("Rejected request body: {}", e);
                warp::reject::custom(InvalidJsonBody)
            })
        })
}

async fn read_capped<S, B>(body: S, limit: u64) -> Result<Vec<u8>, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    let mut body = pin!(body);
    let mut bytes = Vec::new();

    while let Some(chunk) = body.next().await {
        let mut chunk = chunk.map_err(|e| {
            log::debug!("Failed to read request body: {}", e);
            warp::reject::custom(InvalidJsonBody)
        })?;

        while chunk.has_remaining() {
            let part = chunk.chunk();
            if (bytes.len() + part.len()) as u64 > limit {
                return Err(warp::reject::custom(BodyTooLarge));
            }
            bytes.extend_from_slice(part);
            let read = part.len();
            chunk.advance(read);
        }
    }

    Ok(bytes)
}
