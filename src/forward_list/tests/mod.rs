mod poly;
