pub mod kyc_registry;
