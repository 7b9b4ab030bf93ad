//! Shared request helpers over `gloo-net`.
//!
//! Two failure kinds reach the caller through the same `Err(String)`:
//! transport errors (the request never completed) and non-2xx statuses.
//! For the latter the server may put a human-readable `mensaje` in a JSON
//! body; when present it wins over the bare status line.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.json::<serde_json::Value>().await {
        if let Some(msg) = body.get("mensaje").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }
    format!("error HTTP {}", status)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("fallo de conexion: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("respuesta invalida: {}", e))
}

/// POST a JSON body and parse a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("no se pudo serializar la peticion: {}", e))?
        .send()
        .await
        .map_err(|e| format!("fallo de conexion: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("respuesta invalida: {}", e))
}

/// POST a JSON body, ignoring the response body.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("no se pudo serializar la peticion: {}", e))?
        .send()
        .await
        .map_err(|e| format!("fallo de conexion: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// PUT a JSON body, ignoring the response body.
pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("no se pudo serializar la peticion: {}", e))?
        .send()
        .await
        .map_err(|e| format!("fallo de conexion: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

pub async fn delete_unit(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("fallo de conexion: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
