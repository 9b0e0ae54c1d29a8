//! Request ID middleware
//!
//! Tags every request with an `x-request-id`, reusing a well-formed id sent by
//! the client, and echoes it on the response.

use actix_web::HttpRequest;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INBOUND_ID_LEN: usize = 128;

/// Request ID middleware for Actix-web
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService { service }))
    }
}

/// Service implementation for request ID middleware
pub struct RequestIdMiddlewareService<S> {
    service: S,
}

fn inbound_id(req: &ServiceRequest) -> Option<HeaderValue> {
    let value = req.headers().get(REQUEST_ID_HEADER)?;
    let text = value.to_str().ok()?;
    if text.is_empty() || text.len() > MAX_INBOUND_ID_LEN {
        return None;
    }
    Some(value.clone())
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let header_value = inbound_id(&req).unwrap_or_else(|| {
            HeaderValue::from_str(&crate::utils::generate_request_id())
                .unwrap_or_else(|_| HeaderValue::from_static("invalid"))
        });

        debug!(
            "Processing request: {}",
            header_value.to_str().unwrap_or_default()
        );

        let header_name = HeaderName::from_static(REQUEST_ID_HEADER);
        req.headers_mut()
            .insert(header_name.clone(), header_value.clone());

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            res.headers_mut().insert(header_name, header_value);
            Ok(res)
        })
    }
}

/// Request id assigned by [`RequestIdMiddleware`]
pub fn request_id(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
