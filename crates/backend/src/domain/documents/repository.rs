use anyhow::Result;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::list_engine::ListSql;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub collection: String,
    /// Номер документа, дублируется из JSON для нумерации
    pub code: String,
    pub data_json: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn data(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.data_json)?)
    }
}

/// Страница списка и общее число подходящих записей
pub async fn list_page<C: ConnectionTrait>(db: &C, sql: &ListSql) -> Result<(Vec<Model>, u64)> {
    let total = match db.query_one(sql.count_statement()).await? {
        Some(row) => row.try_get::<i64>("", "cnt")?,
        None => 0,
    };
    let models = Entity::find()
        .from_raw_sql(sql.page_statement())
        .all(db)
        .await?;
    Ok((models, total.max(0) as u64))
}

pub async fn get_active<C: ConnectionTrait>(
    db: &C,
    collection: &str,
    id: &str,
) -> Result<Option<Model>> {
    let model = Entity::find_by_id(id.to_string())
        .filter(Column::Collection.eq(collection))
        .filter(Column::IsDeleted.eq(false))
        .one(db)
        .await?;
    Ok(model)
}

/// Все номера коллекции, включая удалённые: номера не переиспользуются
pub async fn list_codes<C: ConnectionTrait>(db: &C, collection: &str) -> Result<Vec<String>> {
    let codes = Entity::find()
        .select_only()
        .column(Column::Code)
        .filter(Column::Collection.eq(collection))
        .into_tuple::<String>()
        .all(db)
        .await?;
    Ok(codes)
}

pub async fn count_all<C: ConnectionTrait>(db: &C, collection: &str) -> Result<u64> {
    let count = Entity::find()
        .filter(Column::Collection.eq(collection))
        .count(db)
        .await?;
    Ok(count)
}

/// Fails on a duplicate `(collection, code)`
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    collection: &str,
    id: &str,
    code: &str,
    data: &Value,
) -> Result<()> {
    let now = Utc::now();
    let active_model = ActiveModel {
        id: Set(id.to_string()),
        collection: Set(collection.to_string()),
        code: Set(code.to_string()),
        data_json: Set(serde_json::to_string(data)?),
        is_deleted: Set(false),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    Entity::insert(active_model).exec(db).await?;
    Ok(())
}

/// Заменяет тело записи, только если оно не менялось с момента чтения `model`.
/// Возвращает `false`, если запись успели изменить или удалить.
pub async fn replace_data<C: ConnectionTrait>(db: &C, model: &Model, data: &Value) -> Result<bool> {
    let result = Entity::update_many()
        .col_expr(Column::DataJson, Expr::value(serde_json::to_string(data)?))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(model.id.as_str()))
        .filter(Column::DataJson.eq(model.data_json.as_str()))
        .filter(Column::IsDeleted.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected == 1)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, model: Model) -> Result<()> {
    let mut active_model: ActiveModel = model.into();
    active_model.is_deleted = Set(true);
    active_model.updated_at = Set(Some(Utc::now()));
    active_model.update(db).await?;
    Ok(())
}
