//! SQLite implementation of the household store.
//!
//! # Responsibility
//! - Map every [`HouseholdStore`] operation onto the migrated schema.
//! - Keep SQL details inside this persistence boundary.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Multi-statement mutations run inside one transaction.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::model::announcement::{Announcement, AnnouncementId};
use crate::model::bill::{Bill, BillId};
use crate::model::chore::{Chore, ChoreId, Priority};
use crate::model::group::{Group, GroupId};
use crate::model::roommate::{MemberStatus, Roommate, RoommateId};
use crate::model::shopping::{ShoppingItem, ShoppingItemId};
use crate::model::snapshot::HouseholdSnapshot;
use crate::store::{Account, CascadeReport, HouseholdStore, StoreError, StoreResult};

const ROOMMATE_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    email,
    color,
    user_uuid,
    status,
    invited_by_uuid,
    group_uuid
FROM roommates";

const GROUP_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    created_by_uuid,
    created_at,
    updated_at
FROM groups";

const BILL_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    amount,
    category,
    paid_by_uuid,
    bill_date,
    settled
FROM bills";

const CHORE_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    description,
    assigned_to_uuid,
    due_date,
    completed,
    completed_date,
    priority
FROM chores";

const SHOPPING_SELECT_SQL: &str = "SELECT
    uuid,
    item,
    added_by_uuid,
    date_added,
    purchased,
    purchased_by_uuid,
    purchased_date
FROM shopping_items";

const ANNOUNCEMENT_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    content,
    created_by_uuid,
    group_uuid,
    expires_at,
    created_at,
    updated_at
FROM announcements";

/// SQLite-backed [`HouseholdStore`].
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn bill_participants(&self, bill: BillId) -> StoreResult<Vec<RoommateId>> {
        let mut stmt = self.conn.prepare(
            "SELECT roommate_uuid FROM bill_participants
             WHERE bill_uuid = ?1
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([bill.to_string()])?;
        let mut participants = Vec::new();
        while let Some(row) = rows.next()? {
            let text: String = row.get("roommate_uuid")?;
            participants.push(parse_uuid(&text, "bill_participants.roommate_uuid")?);
        }
        Ok(participants)
    }

    fn roster_email_taken(&self, email: &str, own_id: RoommateId) -> StoreResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM roommates WHERE email = ?1 AND uuid <> ?2;",
            params![email, own_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

impl HouseholdStore for SqliteStore<'_> {
    fn list_roommates(&self) -> StoreResult<Vec<Roommate>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROOMMATE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut roommates = Vec::new();
        while let Some(row) = rows.next()? {
            roommates.push(parse_roommate_row(row)?);
        }
        Ok(roommates)
    }

    fn get_roommate(&self, id: RoommateId) -> StoreResult<Option<Roommate>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROOMMATE_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_roommate_row(row)?));
        }
        Ok(None)
    }

    fn insert_roommate(&self, roommate: &Roommate) -> StoreResult<RoommateId> {
        roommate.validate()?;
        if self.roster_email_taken(&roommate.email, roommate.id)? {
            return Err(StoreError::DuplicateEmail(roommate.email.clone()));
        }

        self.conn.execute(
            "INSERT INTO roommates (
                uuid,
                name,
                email,
                color,
                user_uuid,
                status,
                invited_by_uuid,
                group_uuid
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                roommate.id.to_string(),
                roommate.name.as_str(),
                roommate.email.as_str(),
                roommate.color.as_str(),
                roommate.user_id.map(|id| id.to_string()),
                roommate.status.map(member_status_to_db),
                roommate.invited_by.map(|id| id.to_string()),
                roommate.group_id.map(|id| id.to_string()),
            ],
        )?;

        Ok(roommate.id)
    }

    fn update_roommate(&self, roommate: &Roommate) -> StoreResult<()> {
        roommate.validate()?;
        if self.roster_email_taken(&roommate.email, roommate.id)? {
            return Err(StoreError::DuplicateEmail(roommate.email.clone()));
        }

        let changed = self.conn.execute(
            "UPDATE roommates
             SET
                name = ?1,
                email = ?2,
                color = ?3,
                user_uuid = ?4,
                status = ?5,
                invited_by_uuid = ?6,
                group_uuid = ?7
             WHERE uuid = ?8;",
            params![
                roommate.name.as_str(),
                roommate.email.as_str(),
                roommate.color.as_str(),
                roommate.user_id.map(|id| id.to_string()),
                roommate.status.map(member_status_to_db),
                roommate.invited_by.map(|id| id.to_string()),
                roommate.group_id.map(|id| id.to_string()),
                roommate.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "roommate",
                id: roommate.id,
            });
        }

        Ok(())
    }

    fn remove_roommate(&self, id: RoommateId) -> StoreResult<CascadeReport> {
        let id_text = id.to_string();
        let tx = self.conn.unchecked_transaction()?;

        let exists: i64 = tx.query_row(
            "SELECT COUNT(*) FROM roommates WHERE uuid = ?1;",
            [id_text.as_str()],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(StoreError::NotFound {
                entity: "roommate",
                id,
            });
        }

        // Participant rows cascade from the bill delete.
        let bills_removed = tx.execute(
            "DELETE FROM bills
             WHERE paid_by_uuid = ?1
                OR uuid IN (
                    SELECT bill_uuid FROM bill_participants WHERE roommate_uuid = ?1
                );",
            [id_text.as_str()],
        )?;
        let chores_removed = tx.execute(
            "DELETE FROM chores WHERE assigned_to_uuid = ?1;",
            [id_text.as_str()],
        )?;
        tx.execute("DELETE FROM roommates WHERE uuid = ?1;", [id_text.as_str()])?;
        tx.commit()?;

        Ok(CascadeReport {
            bills_removed,
            chores_removed,
        })
    }

    fn list_groups(&self) -> StoreResult<Vec<Group>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GROUP_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut groups = Vec::new();
        while let Some(row) = rows.next()? {
            groups.push(parse_group_row(row)?);
        }
        Ok(groups)
    }

    fn insert_group(&self, group: &Group) -> StoreResult<GroupId> {
        group.validate()?;

        self.conn.execute(
            "INSERT INTO groups (uuid, name, created_by_uuid, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                group.id.to_string(),
                group.name.as_str(),
                group.created_by.to_string(),
                group.created_at.timestamp_millis(),
                group.updated_at.timestamp_millis(),
            ],
        )?;

        Ok(group.id)
    }

    fn remove_group(&self, id: GroupId) -> StoreResult<()> {
        // Members and announcements detach via ON DELETE SET NULL.
        let changed = self
            .conn
            .execute("DELETE FROM groups WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "group", id });
        }
        Ok(())
    }

    fn list_bills(&self) -> StoreResult<Vec<Bill>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BILL_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut bills = Vec::new();
        while let Some(row) = rows.next()? {
            bills.push(parse_bill_row(row)?);
        }
        drop(rows);
        drop(stmt);

        for bill in &mut bills {
            bill.split_between = self.bill_participants(bill.id)?;
            bill.validate()?;
        }
        Ok(bills)
    }

    fn insert_bill(&self, bill: &Bill) -> StoreResult<BillId> {
        bill.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO bills (
                uuid,
                title,
                amount,
                category,
                paid_by_uuid,
                bill_date,
                settled
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                bill.id.to_string(),
                bill.title.as_str(),
                bill.amount,
                bill.category.as_str(),
                bill.paid_by.to_string(),
                bill.date.to_string(),
                bool_to_int(bill.settled),
            ],
        )?;
        for (position, roommate) in bill.split_between.iter().enumerate() {
            tx.execute(
                "INSERT INTO bill_participants (bill_uuid, roommate_uuid, position)
                 VALUES (?1, ?2, ?3);",
                params![
                    bill.id.to_string(),
                    roommate.to_string(),
                    position as i64
                ],
            )?;
        }
        tx.commit()?;

        Ok(bill.id)
    }

    fn settle_bill(&self, id: BillId) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE bills SET settled = 1 WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "bill", id });
        }
        Ok(())
    }

    fn list_chores(&self) -> StoreResult<Vec<Chore>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CHORE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut chores = Vec::new();
        while let Some(row) = rows.next()? {
            chores.push(parse_chore_row(row)?);
        }
        Ok(chores)
    }

    fn get_chore(&self, id: ChoreId) -> StoreResult<Option<Chore>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CHORE_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_chore_row(row)?));
        }
        Ok(None)
    }

    fn insert_chore(&self, chore: &Chore) -> StoreResult<ChoreId> {
        chore.validate()?;

        self.conn.execute(
            "INSERT INTO chores (
                uuid,
                title,
                description,
                assigned_to_uuid,
                due_date,
                completed,
                completed_date,
                priority
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                chore.id.to_string(),
                chore.title.as_str(),
                chore.description.as_str(),
                chore.assigned_to.to_string(),
                chore.due_date.to_string(),
                bool_to_int(chore.completed),
                chore.completed_date.map(|d| d.to_string()),
                priority_to_db(chore.priority),
            ],
        )?;

        Ok(chore.id)
    }

    fn set_chore_completion(
        &self,
        id: ChoreId,
        completed_on: Option<NaiveDate>,
    ) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE chores SET completed = ?1, completed_date = ?2 WHERE uuid = ?3;",
            params![
                bool_to_int(completed_on.is_some()),
                completed_on.map(|d| d.to_string()),
                id.to_string(),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "chore", id });
        }
        Ok(())
    }

    fn list_shopping_items(&self) -> StoreResult<Vec<ShoppingItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SHOPPING_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_shopping_row(row)?);
        }
        Ok(items)
    }

    fn insert_shopping_item(&self, item: &ShoppingItem) -> StoreResult<ShoppingItemId> {
        item.validate()?;

        self.conn.execute(
            "INSERT INTO shopping_items (
                uuid,
                item,
                added_by_uuid,
                date_added,
                purchased,
                purchased_by_uuid,
                purchased_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                item.id.to_string(),
                item.item.as_str(),
                item.added_by.to_string(),
                item.date_added.to_string(),
                bool_to_int(item.purchased),
                item.purchased_by.map(|id| id.to_string()),
                item.purchased_date.map(|d| d.to_string()),
            ],
        )?;

        Ok(item.id)
    }

    fn mark_item_purchased(
        &self,
        id: ShoppingItemId,
        by: RoommateId,
        on: NaiveDate,
    ) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE shopping_items
             SET purchased = 1, purchased_by_uuid = ?1, purchased_date = ?2
             WHERE uuid = ?3;",
            params![by.to_string(), on.to_string(), id.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "shopping_item",
                id,
            });
        }
        Ok(())
    }

    fn remove_shopping_item(&self, id: ShoppingItemId) -> StoreResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM shopping_items WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "shopping_item",
                id,
            });
        }
        Ok(())
    }

    fn list_announcements(&self) -> StoreResult<Vec<Announcement>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ANNOUNCEMENT_SELECT_SQL} ORDER BY created_at DESC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut announcements = Vec::new();
        while let Some(row) = rows.next()? {
            announcements.push(parse_announcement_row(row)?);
        }
        Ok(announcements)
    }

    fn get_announcement(&self, id: AnnouncementId) -> StoreResult<Option<Announcement>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ANNOUNCEMENT_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_announcement_row(row)?));
        }
        Ok(None)
    }

    fn insert_announcement(&self, announcement: &Announcement) -> StoreResult<AnnouncementId> {
        announcement.validate()?;

        self.conn.execute(
            "INSERT INTO announcements (
                uuid,
                title,
                content,
                created_by_uuid,
                group_uuid,
                expires_at,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                announcement.id.to_string(),
                announcement.title.as_str(),
                announcement.content.as_str(),
                announcement.created_by.to_string(),
                announcement.group_id.map(|id| id.to_string()),
                announcement.expires_at.map(|t| t.timestamp_millis()),
                announcement.created_at.timestamp_millis(),
                announcement.updated_at.timestamp_millis(),
            ],
        )?;

        Ok(announcement.id)
    }

    fn update_announcement(&self, announcement: &Announcement) -> StoreResult<()> {
        announcement.validate()?;

        let changed = self.conn.execute(
            "UPDATE announcements
             SET
                title = ?1,
                content = ?2,
                group_uuid = ?3,
                expires_at = ?4,
                updated_at = ?5
             WHERE uuid = ?6;",
            params![
                announcement.title.as_str(),
                announcement.content.as_str(),
                announcement.group_id.map(|id| id.to_string()),
                announcement.expires_at.map(|t| t.timestamp_millis()),
                announcement.updated_at.timestamp_millis(),
                announcement.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "announcement",
                id: announcement.id,
            });
        }

        Ok(())
    }

    fn remove_announcement(&self, id: AnnouncementId) -> StoreResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM announcements WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "announcement",
                id,
            });
        }
        Ok(())
    }

    fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare("SELECT user_uuid, email FROM accounts WHERE email = ?1;")?;
        let mut rows = stmt.query([email])?;
        if let Some(row) = rows.next()? {
            let user_text: String = row.get("user_uuid")?;
            return Ok(Some(Account {
                user_id: parse_uuid(&user_text, "accounts.user_uuid")?,
                email: row.get("email")?,
            }));
        }
        Ok(None)
    }

    fn register_account(&self, account: &Account) -> StoreResult<()> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM accounts WHERE email = ?1 AND user_uuid <> ?2;",
            params![account.email.as_str(), account.user_id.to_string()],
            |row| row.get(0),
        )?;
        if count > 0 {
            return Err(StoreError::DuplicateEmail(account.email.clone()));
        }

        self.conn.execute(
            "INSERT OR REPLACE INTO accounts (user_uuid, email) VALUES (?1, ?2);",
            params![account.user_id.to_string(), account.email.as_str()],
        )?;
        Ok(())
    }

    fn snapshot(&self) -> StoreResult<HouseholdSnapshot> {
        Ok(HouseholdSnapshot {
            roommates: self.list_roommates()?,
            groups: self.list_groups()?,
            bills: self.list_bills()?,
            chores: self.list_chores()?,
            shopping_items: self.list_shopping_items()?,
            announcements: self.list_announcements()?,
        })
    }
}

fn parse_roommate_row(row: &Row<'_>) -> StoreResult<Roommate> {
    let uuid_text: String = row.get("uuid")?;
    let status = match row.get::<_, Option<String>>("status")? {
        Some(value) => Some(parse_member_status(&value).ok_or_else(|| {
            StoreError::InvalidData(format!("invalid status `{value}` in roommates.status"))
        })?),
        None => None,
    };

    let roommate = Roommate {
        id: parse_uuid(&uuid_text, "roommates.uuid")?,
        name: row.get("name")?,
        email: row.get("email")?,
        color: row.get("color")?,
        user_id: parse_opt_uuid(row.get("user_uuid")?, "roommates.user_uuid")?,
        status,
        invited_by: parse_opt_uuid(row.get("invited_by_uuid")?, "roommates.invited_by_uuid")?,
        group_id: parse_opt_uuid(row.get("group_uuid")?, "roommates.group_uuid")?,
    };
    roommate.validate()?;
    Ok(roommate)
}

fn parse_group_row(row: &Row<'_>) -> StoreResult<Group> {
    let uuid_text: String = row.get("uuid")?;
    let created_by_text: String = row.get("created_by_uuid")?;

    let group = Group {
        id: parse_uuid(&uuid_text, "groups.uuid")?,
        name: row.get("name")?,
        created_by: parse_uuid(&created_by_text, "groups.created_by_uuid")?,
        created_at: parse_timestamp(row.get("created_at")?, "groups.created_at")?,
        updated_at: parse_timestamp(row.get("updated_at")?, "groups.updated_at")?,
    };
    group.validate()?;
    Ok(group)
}

fn parse_bill_row(row: &Row<'_>) -> StoreResult<Bill> {
    let uuid_text: String = row.get("uuid")?;
    let paid_by_text: String = row.get("paid_by_uuid")?;
    let date_text: String = row.get("bill_date")?;

    // Participants are attached afterwards; validation runs then.
    Ok(Bill {
        id: parse_uuid(&uuid_text, "bills.uuid")?,
        title: row.get("title")?,
        amount: row.get("amount")?,
        category: row.get("category")?,
        paid_by: parse_uuid(&paid_by_text, "bills.paid_by_uuid")?,
        split_between: Vec::new(),
        date: parse_date(&date_text, "bills.bill_date")?,
        settled: parse_bool(row.get("settled")?, "bills.settled")?,
    })
}

fn parse_chore_row(row: &Row<'_>) -> StoreResult<Chore> {
    let uuid_text: String = row.get("uuid")?;
    let assigned_text: String = row.get("assigned_to_uuid")?;
    let due_text: String = row.get("due_date")?;
    let priority_text: String = row.get("priority")?;
    let priority = parse_priority(&priority_text).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid priority `{priority_text}` in chores.priority"
        ))
    })?;

    let chore = Chore {
        id: parse_uuid(&uuid_text, "chores.uuid")?,
        title: row.get("title")?,
        description: row.get("description")?,
        assigned_to: parse_uuid(&assigned_text, "chores.assigned_to_uuid")?,
        due_date: parse_date(&due_text, "chores.due_date")?,
        completed: parse_bool(row.get("completed")?, "chores.completed")?,
        completed_date: parse_opt_date(row.get("completed_date")?, "chores.completed_date")?,
        priority,
    };
    chore.validate()?;
    Ok(chore)
}

fn parse_shopping_row(row: &Row<'_>) -> StoreResult<ShoppingItem> {
    let uuid_text: String = row.get("uuid")?;
    let added_by_text: String = row.get("added_by_uuid")?;
    let date_text: String = row.get("date_added")?;

    let item = ShoppingItem {
        id: parse_uuid(&uuid_text, "shopping_items.uuid")?,
        item: row.get("item")?,
        added_by: parse_uuid(&added_by_text, "shopping_items.added_by_uuid")?,
        date_added: parse_date(&date_text, "shopping_items.date_added")?,
        purchased: parse_bool(row.get("purchased")?, "shopping_items.purchased")?,
        purchased_by: parse_opt_uuid(
            row.get("purchased_by_uuid")?,
            "shopping_items.purchased_by_uuid",
        )?,
        purchased_date: parse_opt_date(
            row.get("purchased_date")?,
            "shopping_items.purchased_date",
        )?,
    };
    item.validate()?;
    Ok(item)
}

fn parse_announcement_row(row: &Row<'_>) -> StoreResult<Announcement> {
    let uuid_text: String = row.get("uuid")?;
    let created_by_text: String = row.get("created_by_uuid")?;

    let announcement = Announcement {
        id: parse_uuid(&uuid_text, "announcements.uuid")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_by: parse_uuid(&created_by_text, "announcements.created_by_uuid")?,
        group_id: parse_opt_uuid(row.get("group_uuid")?, "announcements.group_uuid")?,
        expires_at: parse_opt_timestamp(row.get("expires_at")?, "announcements.expires_at")?,
        created_at: parse_timestamp(row.get("created_at")?, "announcements.created_at")?,
        updated_at: parse_timestamp(row.get("updated_at")?, "announcements.updated_at")?,
    };
    announcement.validate()?;
    Ok(announcement)
}

fn parse_uuid(text: &str, column: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(text)
        .map_err(|_| StoreError::InvalidData(format!("invalid uuid value `{text}` in {column}")))
}

fn parse_opt_uuid(value: Option<String>, column: &str) -> StoreResult<Option<Uuid>> {
    match value {
        Some(text) => Ok(Some(parse_uuid(&text, column)?)),
        None => Ok(None),
    }
}

fn parse_date(text: &str, column: &str) -> StoreResult<NaiveDate> {
    text.parse().map_err(|_| {
        StoreError::InvalidData(format!("invalid date value `{text}` in {column}"))
    })
}

fn parse_opt_date(value: Option<String>, column: &str) -> StoreResult<Option<NaiveDate>> {
    match value {
        Some(text) => Ok(Some(parse_date(&text, column)?)),
        None => Ok(None),
    }
}

fn parse_timestamp(millis: i64, column: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid timestamp value `{millis}` in {column}"))
    })
}

fn parse_opt_timestamp(value: Option<i64>, column: &str) -> StoreResult<Option<DateTime<Utc>>> {
    match value {
        Some(millis) => Ok(Some(parse_timestamp(millis, column)?)),
        None => Ok(None),
    }
}

fn parse_bool(value: i64, column: &str) -> StoreResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(StoreError::InvalidData(format!(
            "invalid flag value `{other}` in {column}"
        ))),
    }
}

fn member_status_to_db(status: MemberStatus) -> &'static str {
    match status {
        MemberStatus::Invited => "invited",
        MemberStatus::Registered => "registered",
    }
}

fn parse_member_status(value: &str) -> Option<MemberStatus> {
    match value {
        "invited" => Some(MemberStatus::Invited),
        "registered" => Some(MemberStatus::Registered),
        _ => None,
    }
}

fn priority_to_db(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value {
        "low" => Some(Priority::Low),
        "medium" => Some(Priority::Medium),
        "high" => Some(Priority::High),
        _ => None,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
