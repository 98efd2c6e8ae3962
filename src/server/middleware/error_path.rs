//! Error path middleware
//!
//! `ResponseError::error_response` has no access to the request, so error
//! bodies leave handlers with an empty `path`. This middleware re-renders
//! `ShopError` responses with the request path filled in.

use crate::utils::error::ShopError;
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;

/// Error path middleware for Actix-web
pub struct ErrorPathMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorPathMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ErrorPathMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorPathMiddlewareService { service }))
    }
}

/// Service implementation for error path middleware
pub struct ErrorPathMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorPathMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            let stamped = res
                .response()
                .error()
                .and_then(|e| e.as_error::<ShopError>())
                .map(|e| e.error_response_at(&path));

            match stamped {
                Some(response) => Ok(res.into_response(response)),
                None => Ok(res.map_into_boxed_body()),
            }
        })
    }
}
