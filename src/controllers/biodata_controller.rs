use actix_multipart::{Field, Multipart};
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    Error, HttpResponse,
};
use futures_util::stream::StreamExt;
use mongodb::bson::{oid::ObjectId, Bson};
use validator::Validate;

use crate::{
    dtos::biodata::{
        create_biodata::{CreateBiodataDto, CreateBiodataResponse},
        update_biodata::{UpdateBiodataDto, UpdateBiodataResponse},
    },
    models::biodata_model::{Biodata, ProfileImage},
    services::db::Database,
};

use super::store_error;

// Initialize routes
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_biodata)
        .service(get_biodata)
        .service(create_biodata)
        .service(update_biodata);
}

#[get("/biodataCreatedCard")]
pub async fn list_biodata(db: Data<Database>) -> Result<Json<Vec<Biodata>>, Error> {
    let records = db
        .list_biodata()
        .await
        .map_err(|e| store_error("Failed to list biodata", e))?;

    Ok(Json(records))
}

#[get("/api/biodata/{id}")]
pub async fn get_biodata(path: Path<String>, db: Data<Database>) -> Result<Json<Biodata>, Error> {
    let id = path.into_inner();
    let id = match ObjectId::parse_str(&id) {
        Ok(id) => id,
        Err(e) => {
            return Err(actix_web::error::ErrorBadRequest(format!(
                "Failed to convert to objectid: {}",
                e
            )));
        }
    };

    let biodata = db
        .get_biodata(id)
        .await
        .map_err(|e| store_error("Failed to fetch biodata", e))?;

    match biodata {
        Some(record) => Ok(Json(record)),
        None => Err(actix_web::error::ErrorNotFound(
            "No biodata found with the given id",
        )),
    }
}

#[post("/api/biodata")]
pub async fn create_biodata(
    mut payload: Multipart,
    db: Data<Database>,
) -> Result<HttpResponse, Error> {
    let mut form_data = CreateBiodataDto::default();
    let mut profile_image: Option<ProfileImage> = None;

    // Walk the multipart form; text fields fill the dto, the file field is
    // buffered whole.
    while let Some(Ok(mut field)) = payload.next().await {
        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => {
                return Err(actix_web::error::ErrorBadRequest("Field name not found"));
            }
        };

        match field_name.as_str() {
            "email" => form_data.email = read_field_text(&mut field).await?,
            "name" => form_data.name = read_field_text(&mut field).await?,
            "age" => form_data.age = read_field_text(&mut field).await?,
            "biodataType" => form_data.biodata_type = read_field_text(&mut field).await?,
            "isMarried" => form_data.is_married = read_field_text(&mut field).await?,
            "profileImage" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|disposition| disposition.get_filename())
                    .unwrap_or("unknown_file")
                    .to_string();
                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    data.extend_from_slice(&chunk?);
                }

                profile_image = Some(ProfileImage {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    form_data.validate().map_err(|e| {
        actix_web::error::ErrorBadRequest(format!("Failed to validate the form: {}", e))
    })?;

    let biodata = form_data
        .into_biodata(profile_image)
        .map_err(actix_web::error::ErrorBadRequest)?;

    let result = db
        .create_biodata(biodata)
        .await
        .map_err(|e| store_error("Failed to insert biodata", e))?;

    let biodata_id = match result.inserted_id {
        Bson::ObjectId(oid) => oid.to_hex(),
        _ => {
            return Err(actix_web::error::ErrorInternalServerError(
                "Internal server error",
            ));
        }
    };

    Ok(HttpResponse::Created().json(CreateBiodataResponse {
        message: "Biodata created successfully".to_string(),
        biodata_id,
    }))
}

#[put("/api/biodata/{id}")]
pub async fn update_biodata(
    path: Path<String>,
    body: Json<UpdateBiodataDto>,
    db: Data<Database>,
) -> Result<Json<UpdateBiodataResponse>, Error> {
    let id = path.into_inner();
    let id = match ObjectId::parse_str(&id) {
        Ok(id) => id,
        Err(e) => {
            return Err(actix_web::error::ErrorBadRequest(format!(
                "Failed to convert to objectid: {}",
                e
            )));
        }
    };

    let update = body
        .into_inner()
        .into_update_document()
        .map_err(actix_web::error::ErrorBadRequest)?;

    let result = db
        .update_biodata(id, update)
        .await
        .map_err(|e| store_error("Failed to update biodata", e))?;

    if result.matched_count == 0 {
        return Err(actix_web::error::ErrorNotFound(
            "No biodata found with the given id",
        ));
    }

    Ok(Json(UpdateBiodataResponse {
        message: "Biodata updated successfully".to_string(),
    }))
}

async fn read_field_text(field: &mut Field) -> Result<String, Error> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8(bytes).unwrap_or_default())
}
