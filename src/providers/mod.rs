pub mod monobank;
