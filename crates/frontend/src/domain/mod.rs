pub mod a001_client;
pub mod a002_employee;
pub mod a003_room;
pub mod a004_service;
pub mod a005_reservation;
pub mod a006_invoice;
pub mod a007_payment;
pub mod a008_cleaning;
pub mod a009_hotel;
