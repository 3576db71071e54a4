use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use px_core::palette::Palette;
use serde_json::json;

use crate::error::ApiError;
use crate::server::AppState;

/// Convert an uploaded image to ASCII art.
///
/// Multipart fields: `image` (file, required), `width` (integer string,
/// optional, bounded by the configured range), `format` (`json` default
/// or `text`).
pub async fn handle_convert(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut image_bytes: Option<Bytes> = None;
    let mut width_field: Option<String> = None;
    let mut format_field: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        let name = field.name().map(ToOwned::to_owned);
        match name.as_deref() {
            Some("image") => {
                image_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::Upload(e.to_string()))?,
                );
            }
            Some("width") => {
                width_field = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::Upload(e.to_string()))?,
                );
            }
            Some("format") => {
                format_field = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::Upload(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let server = &state.config.server;
    let options = &state.config.convert;

    let bytes = image_bytes.ok_or(ApiError::MissingImage)?;

    let width = match width_field {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ApiError::WidthNotInteger)?,
        None => options.width,
    };
    if width < server.min_width || width > server.max_width {
        return Err(ApiError::WidthOutOfRange {
            min: server.min_width,
            max: server.max_width,
        });
    }

    let palette = Palette::new(&options.palette).map_err(|e| ApiError::Internal(e.to_string()))?;
    let frame = px_convert::decode_bytes(&bytes)?;
    let art = px_convert::convert(&frame, width, &palette, options.cell_aspect)?;

    log::info!(
        "converted {}x{} upload at width {width} ({} lines)",
        frame.width,
        frame.height,
        art.line_count()
    );

    let format = format_field.as_deref().unwrap_or("json").to_ascii_lowercase();
    if format == "text" {
        return Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            art.to_string(),
        )
            .into_response());
    }

    Ok(Json(json!({
        "success": true,
        "ascii_art": art.to_string(),
        "width": width,
        "lines": art.line_count(),
    }))
    .into_response())
}

/// API description and usage examples.
pub async fn handle_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let server = &state.config.server;
    let range = format!("{}-{}", server.min_width, server.max_width);

    Json(json!({
        "name": "pixscii API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/convert": {
                "method": "POST",
                "description": "Convert an image to ASCII art",
                "parameters": {
                    "image": {
                        "type": "file",
                        "required": true,
                        "description": "Image file to convert"
                    },
                    "width": {
                        "type": "integer",
                        "required": false,
                        "default": state.config.convert.width,
                        "range": range,
                        "description": "Width of the ASCII art in characters"
                    },
                    "format": {
                        "type": "string",
                        "required": false,
                        "default": "json",
                        "options": ["json", "text"],
                        "description": "Response format"
                    }
                },
                "example_curl": "curl -X POST -F \"image=@photo.jpg\" -F \"width=120\" http://localhost:8000/api/convert"
            },
            "/api/info": {
                "method": "GET",
                "description": "This document"
            }
        }
    }))
}
