use anyhow::Result;
use chrono::Utc;
use contracts::shared::list::{
    ActionResponse, ListQuery, PaginatedResponse, Pagination, PrintResponse,
};
use once_cell::sync::Lazy;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::conversion::{self, NewDocument};
use super::error::DocumentError;
use super::list_engine::ListSql;
use super::registry::{find_collection, CollectionDef};
use super::{numbering, repository};

/// Клонирование и преобразование выполняются по одному: чтение номера,
/// вставка и обновление источника не должны пересекаться
static WRITE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

async fn load<C: ConnectionTrait>(
    db: &C,
    def: &CollectionDef,
    id: &str,
) -> Result<(repository::Model, Value)> {
    let model = repository::get_active(db, def.collection, id)
        .await?
        .ok_or_else(|| DocumentError::not_found(def.collection, id))?;
    let data = model.data()?;
    Ok((model, data))
}

fn document_no(def: &CollectionDef, data: &Value) -> String {
    data.get(def.number_field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

async fn next_number<C: ConnectionTrait>(db: &C, def: &CollectionDef) -> Result<String> {
    let codes = repository::list_codes(db, def.collection).await?;
    Ok(numbering::next_number(
        def.number_prefix,
        codes.iter().map(String::as_str),
    ))
}

pub async fn list(
    db: &DatabaseConnection,
    collection: &str,
    query: &ListQuery,
) -> Result<PaginatedResponse<Value>> {
    let def = find_collection(collection)?;
    let sql = ListSql::build(def, query);
    let (models, total) = repository::list_page(db, &sql).await?;
    let records = models
        .iter()
        .map(repository::Model::data)
        .collect::<Result<Vec<_>>>()?;
    Ok(PaginatedResponse {
        records,
        pagination: Pagination {
            current: sql.page,
            page_size: sql.page_size,
            total,
        },
    })
}

pub async fn get_by_id(db: &DatabaseConnection, collection: &str, id: &str) -> Result<Value> {
    let def = find_collection(collection)?;
    let (_, data) = load(db, def, id).await?;
    Ok(data)
}

pub async fn delete(db: &DatabaseConnection, collection: &str, id: &str) -> Result<ActionResponse> {
    let def = find_collection(collection)?;
    let (model, data) = load(db, def, id).await?;
    repository::soft_delete(db, model).await?;
    tracing::info!("Deleted {} {}", def.collection, id);
    Ok(ActionResponse::ok(format!(
        "{} {} deleted",
        def.element_name,
        document_no(def, &data)
    )))
}

/// Копия записи с новым `_id` и следующим номером; статус копии сбрасывается в draft
pub async fn clone_document(db: &DatabaseConnection, collection: &str, id: &str) -> Result<Value> {
    let def = find_collection(collection)?;
    let _guard = WRITE_LOCK.lock().await;
    let txn = db.begin().await?;
    let (_, mut data) = load(&txn, def, id).await?;

    let new_id = Uuid::new_v4().to_string();
    let number = next_number(&txn, def).await?;
    if let Some(record) = data.as_object_mut() {
        record.insert("_id".to_string(), json!(new_id));
        record.insert(def.number_field.to_string(), json!(number));
        if record.contains_key("status") {
            record.insert("status".to_string(), json!("draft"));
        }
    }

    repository::insert(&txn, def.collection, &new_id, &number, &data).await?;
    txn.commit().await?;
    tracing::info!("Cloned {} {} as {}", def.collection, id, number);
    Ok(data)
}

/// Новый документ и пометка источника `converted` фиксируются одной транзакцией
pub async fn convert(db: &DatabaseConnection, collection: &str, id: &str) -> Result<ActionResponse> {
    let def = find_collection(collection)?;
    let target_def = find_collection(conversion::conversion_target(def.collection)?)?;
    let _guard = WRITE_LOCK.lock().await;
    let txn = db.begin().await?;
    let (model, data) = load(&txn, def, id).await?;
    let source_no = document_no(def, &data);

    let new = NewDocument {
        id: Uuid::new_v4().to_string(),
        number: next_number(&txn, target_def).await?,
        date: Utc::now().date_naive(),
    };
    let new_id = new.id.clone();
    let number = new.number.clone();
    let result = conversion::convert(def.collection, data, new)?;

    // источник меняется только если его не успели изменить после чтения
    if !repository::replace_data(&txn, &model, &result.source).await? {
        return Err(DocumentError::AlreadyConverted(source_no).into());
    }
    repository::insert(&txn, result.target_collection, &new_id, &number, &result.target).await?;
    txn.commit().await?;
    tracing::info!("Converted {} {} into {} {}", def.collection, id, target_def.collection, number);

    Ok(ActionResponse::ok(format!(
        "{} {} created",
        target_def.element_name, number
    )))
}

pub async fn print(db: &DatabaseConnection, collection: &str, id: &str) -> Result<PrintResponse> {
    let def = find_collection(collection)?;
    load(db, def, id).await?;
    Ok(PrintResponse {
        url: format!("/api/{}/{}/document", def.collection, id),
    })
}

/// Печатное представление записи (JSON)
pub async fn document_view(db: &DatabaseConnection, collection: &str, id: &str) -> Result<Value> {
    let def = find_collection(collection)?;
    let (_, data) = load(db, def, id).await?;
    Ok(json!({
        "title": format!("{} {}", def.element_name, document_no(def, &data)),
        "collection": def.collection,
        "generatedAt": Utc::now().to_rfc3339(),
        "record": data,
    }))
}
