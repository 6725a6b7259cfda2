mod charge;
