mod restaurant;
