pub mod cell;
pub mod consultancy;
pub mod ledger;
pub mod mission;
pub mod sheet;
pub mod table;
pub mod unit;
