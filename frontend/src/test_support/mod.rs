pub mod ssr;
