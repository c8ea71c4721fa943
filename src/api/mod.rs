// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Backend surface: response envelopes, marker queries and the marker source seam.
//!
//! Transport is left to the embedding application; this module only shapes requests and
//! decodes responses.

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::model::{GeoBounds, Marker, PlaceType};

pub const MARKERS_PATH: &str = "/api/map/markers";
pub const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

#[derive(Debug)]
pub enum ApiError {
    Json(serde_json::Error),
    /// The backend answered `success: false`.
    Rejected(String),
    /// `success: true` without the expected `data`.
    MissingData,
    /// The bearer token was refused; the session has expired.
    Unauthorized,
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "invalid response json: {source}"),
            Self::Rejected(message) => f.write_str(message),
            Self::MissingData => f.write_str("response carried no data"),
            Self::Unauthorized => f.write_str("authentication expired"),
            Self::Transport(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source)
    }
}

/// `{ success, data?, error? }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Data of a successful response, which may legitimately be absent (e.g. deletes).
    pub fn into_data(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned());
            Err(ApiError::Rejected(message))
        }
    }
}

/// Decodes an envelope whose `data` is required.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: ApiResponse<T> = serde_json::from_str(body)?;
    envelope.into_data()?.ok_or(ApiError::MissingData)
}

/// Decodes an envelope that carries no data.
pub fn decode_ack(body: &str) -> Result<(), ApiError> {
    let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(body)?;
    envelope.into_data().map(|_| ())
}

pub fn authorization_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Filters for the marker listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerQuery {
    pub place_type: Option<PlaceType>,
    pub bounds: Option<GeoBounds>,
}

impl MarkerQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn of_type(mut self, place_type: PlaceType) -> Self {
        self.place_type = Some(place_type);
        self
    }

    pub fn within(mut self, bounds: GeoBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(place_type) = self.place_type {
            pairs.push(format!("type={place_type}"));
        }
        if let Some(bounds) = self.bounds {
            pairs.push(format!("swLat={}", bounds.southwest.lat));
            pairs.push(format!("swLng={}", bounds.southwest.lng));
            pairs.push(format!("neLat={}", bounds.northeast.lat));
            pairs.push(format!("neLng={}", bounds.northeast.lng));
        }
        pairs.join("&")
    }

    /// Request path including the query string, if any.
    pub fn path(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            MARKERS_PATH.to_owned()
        } else {
            format!("{MARKERS_PATH}?{query}")
        }
    }
}

/// Where the marker list comes from.
pub trait MarkerSource {
    fn fetch_markers(
        &self,
        query: &MarkerQuery,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Marker>, ApiError>>;
}
