pub mod polyline;
