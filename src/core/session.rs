//! Per-user session context: the tables loaded from the workbook and the two
//! reconciliation ledgers derived from them. Passed explicitly to every
//! operation instead of living in process-wide state.

use crate::auth::AuthenticatedUser;
use crate::auth::policy::{Section, can_edit, can_view};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ledger::{Ledger, LedgerKind};
use crate::models::sheet::Sheet;
use crate::models::table::Table;
use crate::workbook::{self, SheetTables};

pub struct Session {
    pub(crate) user: AuthenticatedUser,
    pub(crate) tables: SheetTables,
    pub(crate) missions: Ledger,
    pub(crate) consultancies: Ledger,
}

impl Session {
    /// Empty session for `user`; tables are added with `insert_table`.
    pub fn new(user: AuthenticatedUser) -> Self {
        Self {
            user,
            tables: SheetTables::new(),
            missions: Ledger::new(LedgerKind::Missions),
            consultancies: Ledger::new(LedgerKind::Consultancies),
        }
    }

    /// Application load: read the workbook, then run the synchronization pass.
    pub fn open(cfg: &Config, user: AuthenticatedUser) -> AppResult<Self> {
        let mut session = Self::new(user);
        session.tables = workbook::load_catalog(&cfg.workbook_path())?;
        session.synchronize(&cfg.targets());
        Ok(session)
    }

    pub fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    pub fn table(&self, sheet: &Sheet) -> Option<&Table> {
        self.tables.get(sheet.name)
    }

    pub fn insert_table(&mut self, sheet: &'static Sheet, table: Table) {
        self.tables.insert(sheet.name, table);
    }

    pub fn ledger(&self, kind: LedgerKind) -> &Ledger {
        match kind {
            LedgerKind::Missions => &self.missions,
            LedgerKind::Consultancies => &self.consultancies,
        }
    }

    pub(crate) fn ledger_mut(&mut self, kind: LedgerKind) -> &mut Ledger {
        match kind {
            LedgerKind::Missions => &mut self.missions,
            LedgerKind::Consultancies => &mut self.consultancies,
        }
    }

    pub fn can_view(&self, section: Section) -> bool {
        can_view(&self.user.area, section)
    }

    pub fn can_edit(&self, section: Section) -> bool {
        can_edit(&self.user.role, &self.user.area, section)
    }

    /// Fail with `SectionNotVisible` unless the user may see `section`.
    pub fn require_view(&self, section: Section) -> AppResult<()> {
        if self.can_view(section) {
            Ok(())
        } else {
            Err(AppError::SectionNotVisible(section.to_string()))
        }
    }
}
