mod liquidate;
mod price_feed;
mod repay;
mod set_asset;
mod sut;
mod withdraw;
