//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::reservation::{
    NewReservation, Reservation, ReservationRepository, ReservationStatus, CANCELLED_MARKER,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

use super::db_err;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

/// The normalization boundary: legacy/raw values become canonical here,
/// immediately after the store read, and nowhere else.
fn model_to_domain(m: reservation::Model) -> Reservation {
    let booking_reference = if m.booking_reference.trim().is_empty() {
        format!("REF-{}", m.id)
    } else {
        m.booking_reference
    };
    let notes = m.notes.filter(|n| !n.trim().is_empty());

    Reservation {
        id: m.id,
        customer_id: m.customer_id,
        room_id: m.room_id,
        platform_id: m.platform_id,
        check_in: m.check_in,
        check_out: m.check_out,
        guests: m.guests,
        total_price: m.total_price,
        status: ReservationStatus::normalize(&m.status),
        booking_reference,
        notes,
        created_at: m.created_at,
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!("Saving reservation for room {}", r.room_id);

        let model = reservation::ActiveModel {
            id: NotSet,
            customer_id: Set(r.customer_id),
            room_id: Set(r.room_id),
            platform_id: Set(r.platform_id),
            check_in: Set(r.check_in),
            check_out: Set(r.check_out),
            guests: Set(r.guests),
            total_price: Set(r.total_price),
            status: Set(r.status.as_str().to_string()),
            booking_reference: Set(r.booking_reference),
            notes: Set(r.notes),
            created_at: Set(r.created_at),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_desc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_room(&self, room_id: i32) -> DomainResult<Vec<Reservation>> {
        // Legacy cancelled rows must never block new bookings; the filter
        // stays in the query so it applies before normalization folds
        // `cancelled` into `Reserved`.
        let models = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::Status.ne(CANCELLED_MARKER))
            .order_by_asc(reservation::Column::CheckIn)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()> {
        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Reservation", "id", id));
        };

        let mut active: reservation::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
