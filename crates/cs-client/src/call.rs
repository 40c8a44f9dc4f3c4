//! Call handles and the execution-layer boundary.

use std::marker::PhantomData;

use callspec_schema::{ReturnType, TypeToken};

use crate::request::RequestDescriptor;

/// A compiled call whose response decodes into `R`.
///
/// Holds only the descriptor; nothing has been sent.
pub struct Call<R> {
    request: RequestDescriptor,
    _response: PhantomData<fn() -> R>,
}

impl<R> std::fmt::Debug for Call<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Call")
            .field("request", &self.request)
            .finish()
    }
}

impl<R> Clone for Call<R> {
    fn clone(&self) -> Self {
        Self::new(self.request.clone())
    }
}

impl<R> Call<R> {
    pub(crate) fn new(request: RequestDescriptor) -> Self {
        Self {
            request,
            _response: PhantomData,
        }
    }

    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    pub fn response_type(&self) -> TypeToken {
        self.request.response_type()
    }

    pub fn into_request(self) -> RequestDescriptor {
        self.request
    }

    /// Hand the descriptor to an execution layer.
    pub fn execute<E>(self, executor: &E) -> Result<E::Response, E::Error>
    where
        E: CallExecutor<R>,
    {
        executor.execute(self.request)
    }
}

impl<T: 'static> ReturnType for Call<T> {
    fn response_type() -> TypeToken {
        TypeToken::of::<T>()
    }
}

/// The external layer that performs I/O for compiled calls.
///
/// Implementations send the request and decode the response into the type
/// named by [`RequestDescriptor::response_type`].
pub trait CallExecutor<R> {
    type Response;
    type Error;

    fn execute(&self, request: RequestDescriptor) -> Result<Self::Response, Self::Error>;
}
