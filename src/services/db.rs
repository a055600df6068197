use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document, Regex},
    error::Error,
    results::{InsertOneResult, UpdateResult},
    Client, Collection,
};

use crate::models::{
    biodata_model::{Biodata, BiodataType},
    purchase_model::Purchase,
    user_model::User,
};

pub struct Database {
    biodata: Collection<Biodata>,
    user: Collection<User>,
    purchase: Collection<Purchase>,
}

impl Database {
    pub async fn init(db_url: &str) -> Self {
        let client: Client = Client::with_uri_str(db_url)
            .await
            .expect("Failed to connect to MongoDB");
        let db: mongodb::Database = client.database("e-matrimony");

        let biodata: Collection<Biodata> = db.collection("biodataCreatedCard");
        let user: Collection<User> = db.collection("users");
        let purchase: Collection<Purchase> = db.collection("purchases");

        Database {
            biodata,
            user,
            purchase,
        }
    }

    pub async fn list_biodata(&self) -> Result<Vec<Biodata>, Error> {
        let cursor = self.biodata.find(doc! {}).await?;
        cursor.try_collect().await
    }

    pub async fn get_biodata(&self, id: ObjectId) -> Result<Option<Biodata>, Error> {
        let filter: Document = doc! { "_id": id };
        self.biodata.find_one(filter).await
    }

    pub async fn create_biodata(&self, biodata: Biodata) -> Result<InsertOneResult, Error> {
        self.biodata.insert_one(biodata).await
    }

    // Partial merge: only the fields present in `update` change.
    pub async fn update_biodata(
        &self,
        id: ObjectId,
        update: Document,
    ) -> Result<UpdateResult, Error> {
        let filter: Document = doc! { "_id": id };
        self.biodata.update_one(filter, doc! { "$set": update }).await
    }

    pub async fn search_premium_requests(&self, name_text: &str) -> Result<Vec<User>, Error> {
        let filter = doc! {
            "name": Regex {
                pattern: name_text.to_string(),
                options: "i".to_string(), // 'i' for case-insensitive matching
            },
            "isRequestedPremium": true,
        };

        let cursor = self.user.find(filter).await?;
        cursor.try_collect().await
    }

    pub async fn make_admin(&self, id: ObjectId) -> Result<UpdateResult, Error> {
        let filter: Document = doc! { "_id": id };
        let update: Document = doc! { "$set": { "role": "admin" } };
        self.user.update_one(filter, update).await
    }

    pub async fn make_premium(&self, id: ObjectId) -> Result<UpdateResult, Error> {
        let filter: Document = doc! { "_id": id };
        let update: Document = doc! {
            "$set": { "isPremium": true, "isRequestedPremium": false }
        };
        self.user.update_one(filter, update).await
    }

    pub async fn count_biodata(&self) -> Result<u64, Error> {
        self.biodata.count_documents(doc! {}).await
    }

    pub async fn count_biodata_by_type(&self, biodata_type: BiodataType) -> Result<u64, Error> {
        self.biodata
            .count_documents(doc! { "biodataType": biodata_type.as_str() })
            .await
    }

    pub async fn count_premium_biodata(&self) -> Result<u64, Error> {
        self.biodata
            .count_documents(doc! { "isPremium": true })
            .await
    }

    // Sums the price field across every purchase; zero when none exist.
    pub async fn total_revenue(&self) -> Result<f64, Error> {
        let pipeline = vec![doc! {
            "$group": { "_id": null, "total": { "$sum": "$price" } }
        }];

        let mut cursor = self.purchase.aggregate(pipeline).await?;
        let total = match cursor.try_next().await? {
            Some(result) => match result.get("total") {
                Some(Bson::Double(value)) => *value,
                Some(Bson::Int32(value)) => *value as f64,
                Some(Bson::Int64(value)) => *value as f64,
                _ => 0.0,
            },
            None => 0.0,
        };

        Ok(total)
    }
}
